//! Validation of untyped create input.
//!
//! Rules run in a fixed order and the first violation wins, so a body that
//! is missing both `name` and `salary` always reports the name fault.
//!
//! 1. `name` is a non-blank string
//! 2. `salary` is an integer
//! 3. `salary` is not negative
//! 4. `age` is an integer
//! 5. `age` is within 16..=75
//! 6. `title` is a non-blank string
//!
//! Fields beyond these four (for example `email`) are ignored.

use std::ops::RangeInclusive;

use serde_json::Value;

use super::employee::{CreationRequest, RawEmployeeInput};
use super::fault::FaultCode;

/// Field name for the employee name.
pub const NAME_FIELD: &str = "name";
/// Field name for the salary.
pub const SALARY_FIELD: &str = "salary";
/// Field name for the age.
pub const AGE_FIELD: &str = "age";
/// Field name for the job title.
pub const TITLE_FIELD: &str = "title";

/// Accepted ages, inclusive on both ends.
pub const AGE_LIMITS: RangeInclusive<u32> = 16..=75;

/// Turn raw input into a [`CreationRequest`] or the first rule it breaks.
///
/// # Examples
/// ```
/// use employee_api::domain::{validate_creation_request, FaultCode};
/// use serde_json::json;
///
/// let raw = json!({ "name": "A", "salary": 70000, "age": 40, "title": "Accountant" });
/// let request = validate_creation_request(raw.as_object().expect("object"))
///     .expect("valid input");
/// assert_eq!(request.salary(), 70_000);
///
/// let raw = json!({ "age": 40 });
/// assert_eq!(
///     validate_creation_request(raw.as_object().expect("object")),
///     Err(FaultCode::MissingOrInvalidName)
/// );
/// ```
///
/// # Errors
///
/// Returns the [`FaultCode`] of the first violated rule.
pub fn validate_creation_request(raw: &RawEmployeeInput) -> Result<CreationRequest, FaultCode> {
    let name = non_blank_text(raw, NAME_FIELD).ok_or(FaultCode::MissingOrInvalidName)?;
    let salary = integer(raw, SALARY_FIELD).ok_or(FaultCode::MissingOrInvalidSalary)?;
    let salary = u64::try_from(salary).map_err(|_| FaultCode::NegativeSalaryNotAllowed)?;
    let age = integer(raw, AGE_FIELD).ok_or(FaultCode::MissingOrInvalidAge)?;
    let age = u32::try_from(age)
        .ok()
        .filter(|age| AGE_LIMITS.contains(age))
        .ok_or(FaultCode::InvalidAgeLimit)?;
    let title = non_blank_text(raw, TITLE_FIELD).ok_or(FaultCode::MissingOrInvalidTitle)?;

    Ok(CreationRequest::from_validated(
        name.to_owned(),
        salary,
        age,
        title.to_owned(),
    ))
}

fn non_blank_text<'a>(raw: &'a RawEmployeeInput, field: &str) -> Option<&'a str> {
    raw.get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

// Floats, numeric strings and booleans are not integers even when they
// would convert losslessly.
fn integer(raw: &RawEmployeeInput, field: &str) -> Option<i64> {
    raw.get(field).and_then(Value::as_i64)
}
