//! DTOs for the upstream employee service's JSON contract.
//!
//! Every response is wrapped in `{"status": "...", "data": ...}`. Employee
//! fields carry an `employee_` prefix upstream; the unprefixed names are
//! accepted as aliases. Numeric fields may arrive as numbers or as numeric
//! strings.

use serde::{Deserialize, Serialize};

use crate::domain::{CreationRequest, Employee, EmployeeId};

/// Absent and `null` fields both decode as `None`.
#[derive(Debug, Deserialize)]
pub(super) struct EnvelopeDto<T> {
    pub(super) status: Option<String>,
    pub(super) data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum IdDto {
    Text(String),
    Integer(u64),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum CountDto {
    Integer(u64),
    Text(String),
}

impl CountDto {
    fn parse(self, field: &str) -> Result<u64, String> {
        match self {
            Self::Integer(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("{field} is not a non-negative integer: {text:?}")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct EmployeeDto {
    pub(super) id: IdDto,
    #[serde(rename = "employee_name", alias = "name")]
    pub(super) name: String,
    #[serde(rename = "employee_salary", alias = "salary")]
    pub(super) salary: CountDto,
    #[serde(rename = "employee_age", alias = "age")]
    pub(super) age: CountDto,
    #[serde(rename = "employee_title", alias = "title")]
    pub(super) title: String,
    #[serde(default, rename = "employee_email", alias = "email")]
    pub(super) email: Option<String>,
}

impl EmployeeDto {
    pub(super) fn into_domain(self) -> Result<Employee, String> {
        let id = match self.id {
            IdDto::Text(text) => text,
            IdDto::Integer(value) => value.to_string(),
        };
        let id = EmployeeId::new(&id).map_err(|err| format!("employee id {id:?}: {err}"))?;
        let salary = self.salary.parse("employee_salary")?;
        let age = self.age.parse("employee_age")?;
        let age = u32::try_from(age).map_err(|_| format!("employee_age out of range: {age}"))?;

        let employee = Employee::new(id, self.name, salary, age, self.title);
        Ok(match self.email {
            Some(email) => employee.with_email(email),
            None => employee,
        })
    }
}

/// Body for `POST {base}`.
#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeBody<'a> {
    pub(super) name: &'a str,
    pub(super) salary: u64,
    pub(super) age: u32,
    pub(super) title: &'a str,
}

impl<'a> From<&'a CreationRequest> for CreateEmployeeBody<'a> {
    fn from(request: &'a CreationRequest) -> Self {
        Self {
            name: request.name(),
            salary: request.salary(),
            age: request.age(),
            title: request.title(),
        }
    }
}

/// Body for `DELETE {base}`; the upstream deletes by name.
#[derive(Debug, Serialize)]
pub(super) struct DeleteEmployeeBody<'a> {
    pub(super) name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Employee, String> {
        serde_json::from_value::<EmployeeDto>(value)
            .map_err(|err| err.to_string())?
            .into_domain()
    }

    #[test]
    fn decodes_prefixed_fields() {
        let employee = decode(json!({
            "id": "4a3a170b",
            "employee_name": "Shivam Sapate",
            "employee_salary": 50_000,
            "employee_age": 25,
            "employee_title": "Software Engineer",
            "employee_email": "shivam@company.com",
        }))
        .expect("valid record");
        assert_eq!(employee.id().as_ref(), "4a3a170b");
        assert_eq!(employee.salary(), 50_000);
        assert_eq!(employee.email(), Some("shivam@company.com"));
    }

    #[test]
    fn accepts_unprefixed_aliases_and_numeric_strings() {
        let employee = decode(json!({
            "id": 12,
            "name": "John Doe",
            "salary": "5000",
            "age": " 40 ",
            "title": "Clerk",
        }))
        .expect("valid record");
        assert_eq!(employee.id().as_ref(), "12");
        assert_eq!(employee.salary(), 5_000);
        assert_eq!(employee.age(), 40);
        assert_eq!(employee.email(), None);
    }

    #[rstest]
    #[case::text_salary(json!({
        "id": "1",
        "employee_name": "A",
        "employee_salary": "lots",
        "employee_age": 30,
        "employee_title": "T",
    }))]
    #[case::negative_salary(json!({
        "id": "1",
        "employee_name": "A",
        "employee_salary": -5,
        "employee_age": 30,
        "employee_title": "T",
    }))]
    #[case::blank_id(json!({
        "id": " ",
        "employee_name": "A",
        "employee_salary": 1,
        "employee_age": 30,
        "employee_title": "T",
    }))]
    #[case::missing_title(json!({
        "id": "1",
        "employee_name": "A",
        "employee_salary": 1,
        "employee_age": 30,
    }))]
    fn rejects_records_that_break_the_contract(#[case] value: serde_json::Value) {
        assert!(decode(value).is_err());
    }

    #[rstest]
    #[case::null_data(json!({ "status": "Successfully processed request.", "data": null }))]
    #[case::missing_data(json!({ "status": "Successfully processed request." }))]
    #[case::bare_object(json!({}))]
    fn absent_data_decodes_as_none(#[case] value: serde_json::Value) {
        let envelope: EnvelopeDto<EmployeeDto> = serde_json::from_value(value).expect("envelope");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn boolean_payloads_decode() {
        let envelope: EnvelopeDto<bool> =
            serde_json::from_value(json!({ "status": "ok", "data": true })).expect("envelope");
        assert_eq!(envelope.status.as_deref(), Some("ok"));
        assert_eq!(envelope.data, Some(true));
    }

    #[test]
    fn create_body_uses_unprefixed_names() {
        let request = crate::domain::validate_creation_request(
            json!({ "name": "A", "salary": 70_000, "age": 40, "title": "Accountant" })
                .as_object()
                .expect("object literal"),
        )
        .expect("valid request");
        let body = serde_json::to_value(CreateEmployeeBody::from(&request)).expect("serialise");
        assert_eq!(
            body,
            json!({ "name": "A", "salary": 70_000, "age": 40, "title": "Accountant" })
        );
    }
}
