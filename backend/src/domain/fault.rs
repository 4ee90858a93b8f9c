//! Closed catalogue of caller-facing faults.
//!
//! Every failed operation surfaces exactly one [`FaultCode`]. Each member
//! carries a stable short code, a fixed human-readable message and a
//! [`FaultClass`] that inbound adapters translate into protocol statuses.
//! The table is process-wide and immutable; nothing here is built per request
//! beyond selecting a member.

use std::fmt;

/// Caller-visible classification of a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultClass {
    /// The caller supplied missing or invalid input.
    BadInput,
    /// The upstream call succeeded but produced nothing matching.
    NotFound,
    /// The upstream service throttled the request.
    RateLimited,
    /// Anything else; details are not exposed to callers.
    Internal,
}

/// Stable fault identifiers raised by validation, orchestration and the
/// upstream gateway.
///
/// # Examples
/// ```
/// use employee_api::domain::{FaultClass, FaultCode};
///
/// let fault = FaultCode::InvalidAgeLimit;
/// assert_eq!(fault.code(), "E11");
/// assert_eq!(fault.class(), FaultClass::BadInput);
/// assert_eq!(FaultCode::from_code("E11"), Some(fault));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCode {
    /// The employee id was absent or blank.
    NullEmployeeId,
    /// The upstream service has no employee with the requested id.
    EmployeeNotFoundById,
    /// The upstream collection is empty, or a lookup returned no record.
    NoEmployeesFound,
    /// `name` is missing, not text, or blank.
    MissingOrInvalidName,
    /// No employee name contains the search text.
    EmployeeNotFoundByName,
    /// `salary` is missing or not an integer.
    MissingOrInvalidSalary,
    /// `salary` is below zero.
    NegativeSalaryNotAllowed,
    /// `title` is missing, not text, or blank.
    MissingOrInvalidTitle,
    /// `age` is missing or not an integer.
    MissingOrInvalidAge,
    /// `age` falls outside 16..=75.
    InvalidAgeLimit,
    /// The upstream call failed for a reason other than throttling.
    UpstreamCallFailed,
    /// The upstream service signalled too many requests.
    RateLimited,
    /// The create body was not a JSON object.
    MalformedRequestBody,
}

impl FaultCode {
    /// Every member of the catalogue, in code order.
    pub const ALL: [Self; 13] = [
        Self::NullEmployeeId,
        Self::EmployeeNotFoundById,
        Self::NoEmployeesFound,
        Self::MissingOrInvalidName,
        Self::EmployeeNotFoundByName,
        Self::MissingOrInvalidSalary,
        Self::NegativeSalaryNotAllowed,
        Self::MissingOrInvalidTitle,
        Self::MissingOrInvalidAge,
        Self::InvalidAgeLimit,
        Self::UpstreamCallFailed,
        Self::RateLimited,
        Self::MalformedRequestBody,
    ];

    /// Stable short code returned to callers in the `error` field.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NullEmployeeId => "E1",
            Self::EmployeeNotFoundById => "E2",
            Self::NoEmployeesFound => "E3",
            Self::MissingOrInvalidName => "E4",
            Self::EmployeeNotFoundByName => "E5",
            Self::MissingOrInvalidSalary => "E6",
            Self::NegativeSalaryNotAllowed => "E7",
            Self::MissingOrInvalidTitle => "E8",
            Self::MissingOrInvalidAge => "E9",
            Self::InvalidAgeLimit => "E11",
            Self::UpstreamCallFailed => "E12",
            Self::RateLimited => "E13",
            Self::MalformedRequestBody => "E14",
        }
    }

    /// Human-readable message paired with [`Self::code`].
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NullEmployeeId => "Employee ID cannot be null",
            Self::EmployeeNotFoundById => "Employee not found with the specified ID",
            Self::NoEmployeesFound => "No data available for employees",
            Self::MissingOrInvalidName => "Name is required",
            Self::EmployeeNotFoundByName => "Employee not found with the specified name",
            Self::MissingOrInvalidSalary => "Salary is required",
            Self::NegativeSalaryNotAllowed => "Salary cannot be a negative value",
            Self::MissingOrInvalidTitle => "Title is required",
            Self::MissingOrInvalidAge => "Age is required",
            Self::InvalidAgeLimit => "Age must be greater than 15 and less than 76",
            Self::UpstreamCallFailed => "Failed to make the REST API request",
            Self::RateLimited => "Employee api rate limit exceeded",
            Self::MalformedRequestBody => "Request body must be a JSON object",
        }
    }

    /// Classification used by adapters to pick a status.
    #[must_use]
    pub const fn class(self) -> FaultClass {
        match self {
            Self::NullEmployeeId
            | Self::MissingOrInvalidName
            | Self::MissingOrInvalidSalary
            | Self::NegativeSalaryNotAllowed
            | Self::MissingOrInvalidTitle
            | Self::MissingOrInvalidAge
            | Self::InvalidAgeLimit
            | Self::MalformedRequestBody => FaultClass::BadInput,
            Self::EmployeeNotFoundById | Self::NoEmployeesFound | Self::EmployeeNotFoundByName => {
                FaultClass::NotFound
            }
            Self::RateLimited => FaultClass::RateLimited,
            Self::UpstreamCallFailed => FaultClass::Internal,
        }
    }

    /// Resolve a short code back to its catalogue member.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|fault| fault.code() == code)
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
