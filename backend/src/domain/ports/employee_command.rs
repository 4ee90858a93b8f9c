//! Driving port for employee mutations.

use async_trait::async_trait;

use crate::domain::{DeletionOutcome, Employee, Error, RawEmployeeInput};

/// Write-side use cases forwarded to the upstream service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Validate untyped input and submit it upstream.
    ///
    /// Untyped data never reaches the upstream port: the input is converted
    /// into a [`crate::domain::CreationRequest`] first.
    async fn create_employee(&self, input: &RawEmployeeInput) -> Result<Employee, Error>;

    /// Delete by id. The upstream deletes by name, so this is a lookup
    /// followed by a delete and is not atomic.
    async fn delete_employee(&self, id: &str) -> Result<DeletionOutcome, Error>;
}
