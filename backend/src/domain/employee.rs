//! Employee records and the values that produce or remove them.
//!
//! Records are owned by the upstream service. This crate reads snapshots of
//! them, validates the input that creates one, and requests deletion; it
//! never mutates a record in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped create input as decoded from a JSON object.
pub type RawEmployeeInput = Map<String, Value>;

/// Validation errors returned by [`EmployeeId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeIdError {
    /// The id was empty or whitespace only.
    #[error("employee id must not be blank")]
    Blank,
}

/// Opaque, upstream-assigned employee identifier.
///
/// # Examples
/// ```
/// use employee_api::domain::EmployeeId;
///
/// let id = EmployeeId::new("4a3a170b-22cd-4ac2-aad1-9bb5b34a1507").expect("valid id");
/// assert_eq!(id.as_ref(), "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507");
/// assert!(EmployeeId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and construct an id from borrowed input.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeIdError::Blank`] when `raw` is empty once trimmed.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmployeeIdError> {
        Self::try_from(raw.as_ref().to_owned())
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = EmployeeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(EmployeeIdError::Blank);
        }
        Ok(Self(value))
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One employee as held by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    salary: u64,
    age: u32,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl Employee {
    /// Assemble a record from upstream fields.
    #[must_use]
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        salary: u64,
        age: u32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            age,
            title: title.into(),
            email: None,
        }
    }

    /// Attach the upstream contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Upstream-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Full name; the upstream delete contract is keyed on it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annual salary.
    #[must_use]
    pub fn salary(&self) -> u64 {
        self.salary
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Contact email, when the upstream supplied one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Validated projection of create input.
///
/// Only [`crate::domain::validate_creation_request`] builds one, so a value of
/// this type always satisfies every creation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    name: String,
    salary: u64,
    age: u32,
    title: String,
}

impl CreationRequest {
    pub(super) fn from_validated(name: String, salary: u64, age: u32, title: String) -> Self {
        Self {
            name,
            salary,
            age,
            title,
        }
    }

    /// Employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Non-negative salary.
    #[must_use]
    pub fn salary(&self) -> u64 {
        self.salary
    }

    /// Age within 16..=75.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionOutcome {
    success: bool,
}

impl DeletionOutcome {
    /// Wrap the upstream acknowledgement.
    #[must_use]
    pub fn new(success: bool) -> Self {
        Self { success }
    }

    /// Whether the upstream reported the record as removed.
    #[must_use]
    pub fn success(self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(EmployeeId::new(raw), Err(EmployeeIdError::Blank));
    }

    #[test]
    fn ids_are_kept_verbatim() {
        let id = EmployeeId::new(" 123 ").expect("non-blank id");
        assert_eq!(id.as_ref(), " 123 ");
    }

    #[test]
    fn employee_serialises_with_flat_field_names() {
        let employee = Employee::new(
            EmployeeId::new("123").expect("id"),
            "Shivam Sapate",
            50_000,
            25,
            "Software Engineer",
        )
        .with_email("shivamspate@gmail.com");

        let value = serde_json::to_value(&employee).expect("serialise");
        assert_eq!(
            value,
            json!({
                "id": "123",
                "name": "Shivam Sapate",
                "salary": 50_000,
                "age": 25,
                "title": "Software Engineer",
                "email": "shivamspate@gmail.com",
            })
        );
    }

    #[test]
    fn email_is_omitted_when_absent() {
        let employee = Employee::new(EmployeeId::new("7").expect("id"), "A", 1, 30, "B");
        let value = serde_json::to_value(&employee).expect("serialise");
        assert!(value.get("email").is_none());
    }

    #[test]
    fn deletion_outcome_serialises_success_flag() {
        let value = serde_json::to_value(DeletionOutcome::new(true)).expect("serialise");
        assert_eq!(value, json!({ "success": true }));
    }
}
