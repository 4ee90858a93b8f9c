//! Caller-facing error payload.
//!
//! The payload is transport agnostic: it pairs one [`FaultCode`] with the
//! request's trace identifier and optional structured details. Inbound
//! adapters decide how a [`FaultClass`] becomes a protocol status.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fault::{FaultClass, FaultCode};
use super::trace_id::TraceId;

/// Error returned by every failed domain operation.
///
/// Serialises as `{"error": "E4", "message": "Name is required"}` plus
/// `traceId` and `details` when present.
///
/// # Examples
/// ```
/// use employee_api::domain::{Error, FaultCode};
///
/// let err = Error::from(FaultCode::NullEmployeeId);
/// assert_eq!(err.code(), "E1");
/// assert_eq!(err.message(), "Employee ID cannot be null");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    fault: FaultCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

/// Failures raised while decoding an error payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The `error` field does not name a known fault.
    #[error("unknown fault code: {0}")]
    UnknownCode(String),
}

impl Error {
    /// Build the error for `fault`, capturing the trace identifier in scope.
    #[must_use]
    pub fn new(fault: FaultCode) -> Self {
        Self {
            fault,
            message: fault.message().to_owned(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// The fault this error reports.
    #[must_use]
    pub fn fault(&self) -> FaultCode {
        self.fault
    }

    /// Stable short code, e.g. `E4`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.fault.code()
    }

    /// Classification driving the adapter status.
    #[must_use]
    pub fn class(&self) -> FaultClass {
        self.fault.class()
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier, when one was in scope.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary details for callers.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach an explicit trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use employee_api::domain::{Error, FaultCode};
    /// use serde_json::json;
    ///
    /// let err = Error::from(FaultCode::MissingOrInvalidAge)
    ///     .with_details(json!({ "field": "age" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Copy of this error safe to show callers: internal faults lose their
    /// details.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut redacted = self.clone();
        if matches!(self.class(), FaultClass::Internal) {
            redacted.message = self.fault.message().to_owned();
            redacted.details = None;
        }
        redacted
    }
}

impl From<FaultCode> for Error {
    fn from(fault: FaultCode) -> Self {
        Self::new(fault)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    error: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            error: value.fault.code().to_owned(),
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            error,
            message,
            trace_id,
            details,
        } = value;
        let fault =
            FaultCode::from_code(&error).ok_or(ErrorValidationError::UnknownCode(error))?;
        Ok(Self {
            fault,
            message,
            trace_id,
            details,
        })
    }
}

#[cfg(test)]
mod tests;
