//! Domain types, rules and use cases for the employee facade.
//!
//! Purpose: keep every decision about employee data (validation, fault
//! selection, aggregation) free of HTTP and transport concerns. Inbound
//! adapters talk to [`ports::EmployeeQuery`] and [`ports::EmployeeCommand`];
//! outbound adapters implement [`ports::EmployeeUpstream`].
//!
//! Public surface:
//! - Error / FaultCode / FaultClass: the caller-facing fault taxonomy.
//! - Employee, EmployeeId, CreationRequest, DeletionOutcome: data model.
//! - validate_creation_request and the aggregate helpers: pure rules.
//! - EmployeeGateway and EmployeeService: orchestration over the upstream.

pub mod employee;
pub mod employee_aggregates;
pub mod employee_gateway;
pub mod employee_service;
pub mod employee_validation;
pub mod error;
pub mod fault;
pub mod ports;
pub mod trace_id;

pub use self::employee::{
    CreationRequest, DeletionOutcome, Employee, EmployeeId, EmployeeIdError, RawEmployeeInput,
};
pub use self::employee_aggregates::{
    TOP_EARNERS_LIMIT, max_salary, search_by_name, top_by_salary,
};
pub use self::employee_gateway::EmployeeGateway;
pub use self::employee_service::EmployeeService;
pub use self::employee_validation::{AGE_LIMITS, validate_creation_request};
pub use self::error::{Error, ErrorValidationError};
pub use self::fault::{FaultClass, FaultCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Result alias for domain operations.
///
/// # Examples
/// ```
/// use employee_api::domain::{DomainResult, FaultCode};
///
/// fn lookup(id: &str) -> DomainResult<&str> {
///     if id.trim().is_empty() {
///         return Err(FaultCode::NullEmployeeId.into());
///     }
///     Ok(id)
/// }
///
/// assert!(lookup(" ").is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
