//! Fault mapping around the upstream employee port.
//!
//! The adapter behind [`EmployeeUpstream`] only classifies transport
//! outcomes. This gateway turns those classes into caller-facing fault codes,
//! depending on which call produced them, and owns the two-step delete.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::employee::{CreationRequest, DeletionOutcome, Employee, EmployeeId};
use super::fault::FaultCode;
use super::ports::{EmployeeUpstream, EmployeeUpstreamError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpstreamCall {
    List,
    Get,
    Create,
    DeleteLookup,
    Delete,
}

impl UpstreamCall {
    fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::DeleteLookup => "delete_lookup",
            Self::Delete => "delete",
        }
    }

    /// Upstream 404 only means "no such id" for calls addressed by id.
    fn not_found_fault(self) -> FaultCode {
        match self {
            Self::Get | Self::DeleteLookup | Self::Delete => FaultCode::EmployeeNotFoundById,
            Self::List | Self::Create => FaultCode::UpstreamCallFailed,
        }
    }

    fn fault_for(self, error: &EmployeeUpstreamError) -> FaultCode {
        match error {
            EmployeeUpstreamError::RateLimited { .. } => FaultCode::RateLimited,
            EmployeeUpstreamError::NotFound { .. } => self.not_found_fault(),
            EmployeeUpstreamError::Timeout { .. }
            | EmployeeUpstreamError::Rejected { .. }
            | EmployeeUpstreamError::Transport { .. }
            | EmployeeUpstreamError::Decode { .. } => FaultCode::UpstreamCallFailed,
        }
    }

    fn map_failure(self, error: EmployeeUpstreamError) -> FaultCode {
        let fault = self.fault_for(&error);
        if matches!(error, EmployeeUpstreamError::Decode { .. }) {
            error!(
                call = self.as_str(),
                fault = fault.code(),
                error = %error,
                "employee upstream payload did not match the contract"
            );
        } else {
            warn!(
                call = self.as_str(),
                fault = fault.code(),
                error = %error,
                "employee upstream call failed"
            );
        }
        fault
    }
}

/// One upstream call per operation, no retries, faults as [`FaultCode`].
pub struct EmployeeGateway<U> {
    upstream: Arc<U>,
}

impl<U> Clone for EmployeeGateway<U> {
    fn clone(&self) -> Self {
        Self {
            upstream: Arc::clone(&self.upstream),
        }
    }
}

impl<U> EmployeeGateway<U> {
    /// Wrap an upstream adapter.
    pub fn new(upstream: Arc<U>) -> Self {
        Self { upstream }
    }
}

impl<U> EmployeeGateway<U>
where
    U: EmployeeUpstream,
{
    /// Fetch the full dataset.
    pub async fn list_all(&self) -> Result<Vec<Employee>, FaultCode> {
        self.upstream
            .fetch_all()
            .await
            .map_err(|err| UpstreamCall::List.map_failure(err))
    }

    /// Fetch one record; `Ok(None)` when the upstream answered without one.
    pub async fn get_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, FaultCode> {
        self.upstream
            .fetch_by_id(id)
            .await
            .map_err(|err| UpstreamCall::Get.map_failure(err))
    }

    /// Submit a validated request.
    pub async fn create(&self, request: &CreationRequest) -> Result<Employee, FaultCode> {
        let employee = self
            .upstream
            .submit(request)
            .await
            .map_err(|err| UpstreamCall::Create.map_failure(err))?;
        info!(employee_id = %employee.id(), "employee created upstream");
        Ok(employee)
    }

    /// Resolve the record's name, then delete by name.
    ///
    /// The two calls are not atomic. If the record is removed or renamed
    /// between them, the second call fails and that fault is surfaced as is.
    pub async fn delete(&self, id: &EmployeeId) -> Result<DeletionOutcome, FaultCode> {
        let employee = self
            .upstream
            .fetch_by_id(id)
            .await
            .map_err(|err| UpstreamCall::DeleteLookup.map_failure(err))?
            .ok_or(FaultCode::EmployeeNotFoundById)?;

        let success = self
            .upstream
            .delete_by_name(employee.name())
            .await
            .map_err(|err| UpstreamCall::Delete.map_failure(err))?;
        info!(employee_id = %id, success, "employee delete forwarded upstream");
        Ok(DeletionOutcome::new(success))
    }
}
