//! Driving port for employee read operations.
//!
//! HTTP handlers call this port with path values exactly as received. Every
//! method fails with a [`crate::domain::Error`] carrying one fault code.

use async_trait::async_trait;

use crate::domain::{Employee, Error};

/// Read-side use cases over the upstream employee dataset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Every employee; an empty dataset is reported as a fault.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// One employee by upstream id. A blank id fails before any I/O.
    async fn employee_by_id(&self, id: &str) -> Result<Employee, Error>;

    /// Employees whose name contains `fragment`, case-sensitively.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>, Error>;

    /// Highest salary across the dataset.
    async fn highest_salary(&self) -> Result<u64, Error>;

    /// The ten best-paid employees, highest first.
    async fn top_ten_by_earnings(&self) -> Result<Vec<Employee>, Error>;
}
