//! Driven port for the upstream employee REST service.
//!
//! Adapters report each call as either a success payload or one classified
//! failure. Mapping those failures onto caller-facing faults happens in
//! [`crate::domain::EmployeeGateway`], so the rules stay testable without a
//! network.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{CreationRequest, Employee, EmployeeId};

define_port_error! {
    /// Classified failures of a single upstream call.
    pub enum EmployeeUpstreamError {
        /// The upstream answered 429 Too Many Requests.
        RateLimited { message: String } =>
            "employee upstream rate limited request: {message}",
        /// The upstream answered 404 Not Found.
        NotFound { message: String } =>
            "employee upstream has no such record: {message}",
        /// The call timed out on the client or the upstream.
        Timeout { message: String } =>
            "employee upstream timeout: {message}",
        /// The upstream rejected the request with another client error.
        Rejected { message: String } =>
            "employee upstream rejected request: {message}",
        /// Connection failure or server-side error.
        Transport { message: String } =>
            "employee upstream transport failed: {message}",
        /// The response body did not match the envelope contract.
        Decode { message: String } =>
            "employee upstream response decode failed: {message}",
    }
}

/// One call per method against the upstream service.
///
/// Implementations hold no state between calls and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// Fetch every employee.
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeeUpstreamError>;

    /// Fetch one employee; `Ok(None)` when the envelope carried no record.
    async fn fetch_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeUpstreamError>;

    /// Submit a validated creation request and return the stored record.
    async fn submit(&self, request: &CreationRequest) -> Result<Employee, EmployeeUpstreamError>;

    /// Delete by name, the key the upstream delete contract uses.
    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeUpstreamError>;
}
