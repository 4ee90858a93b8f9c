//! Employee use cases behind the driving ports.
//!
//! Each call is one linear pipeline: validate where needed, make the
//! upstream call(s) through [`EmployeeGateway`], aggregate in memory and
//! decide which empty results count as faults. Nothing is kept between calls.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::employee::{DeletionOutcome, Employee, EmployeeId, RawEmployeeInput};
use super::employee_aggregates::{TOP_EARNERS_LIMIT, max_salary, search_by_name, top_by_salary};
use super::employee_gateway::EmployeeGateway;
use super::employee_validation::validate_creation_request;
use super::error::Error;
use super::fault::FaultCode;
use super::ports::{EmployeeCommand, EmployeeQuery, EmployeeUpstream};

/// Implements [`EmployeeQuery`] and [`EmployeeCommand`] over an upstream.
pub struct EmployeeService<U> {
    gateway: EmployeeGateway<U>,
}

impl<U> Clone for EmployeeService<U> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<U> EmployeeService<U> {
    /// Create a service over the given upstream adapter.
    pub fn new(upstream: Arc<U>) -> Self {
        Self {
            gateway: EmployeeGateway::new(upstream),
        }
    }
}

impl<U> EmployeeService<U>
where
    U: EmployeeUpstream,
{
    async fn non_empty_snapshot(&self) -> Result<Vec<Employee>, Error> {
        let employees = self.gateway.list_all().await?;
        if employees.is_empty() {
            return Err(FaultCode::NoEmployeesFound.into());
        }
        info!(count = employees.len(), "fetched employee snapshot");
        Ok(employees)
    }
}

fn present_id(raw: &str) -> Result<EmployeeId, Error> {
    EmployeeId::new(raw).map_err(|_| Error::from(FaultCode::NullEmployeeId))
}

#[async_trait]
impl<U> EmployeeQuery for EmployeeService<U>
where
    U: EmployeeUpstream,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.non_empty_snapshot().await
    }

    async fn employee_by_id(&self, id: &str) -> Result<Employee, Error> {
        let id = present_id(id)?;
        // A missing single record shares the empty-dataset fault.
        self.gateway
            .get_by_id(&id)
            .await?
            .ok_or_else(|| FaultCode::NoEmployeesFound.into())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>, Error> {
        let matches = search_by_name(self.non_empty_snapshot().await?, fragment);
        if matches.is_empty() {
            return Err(FaultCode::EmployeeNotFoundByName.into());
        }
        info!(matches = matches.len(), "employee name search matched");
        Ok(matches)
    }

    async fn highest_salary(&self) -> Result<u64, Error> {
        let employees = self.non_empty_snapshot().await?;
        Ok(max_salary(&employees))
    }

    async fn top_ten_by_earnings(&self) -> Result<Vec<Employee>, Error> {
        let employees = self.non_empty_snapshot().await?;
        Ok(top_by_salary(employees, TOP_EARNERS_LIMIT))
    }
}

#[async_trait]
impl<U> EmployeeCommand for EmployeeService<U>
where
    U: EmployeeUpstream,
{
    async fn create_employee(&self, input: &RawEmployeeInput) -> Result<Employee, Error> {
        let request = validate_creation_request(input)?;
        info!("employee creation request validated");
        Ok(self.gateway.create(&request).await?)
    }

    async fn delete_employee(&self, id: &str) -> Result<DeletionOutcome, Error> {
        let id = present_id(id)?;
        Ok(self.gateway.delete(&id).await?)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
