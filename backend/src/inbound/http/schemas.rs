//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their serialised shape and are registered with
//! utoipa under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::FaultCode`].
///
/// Stable short codes returned in the `error` field of error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::FaultCode)]
pub enum FaultCodeSchema {
    /// Employee ID cannot be null.
    #[schema(rename = "E1")]
    NullEmployeeId,
    /// Employee not found with the specified ID.
    #[schema(rename = "E2")]
    EmployeeNotFoundById,
    /// No data available for employees.
    #[schema(rename = "E3")]
    NoEmployeesFound,
    /// Name is required.
    #[schema(rename = "E4")]
    MissingOrInvalidName,
    /// Employee not found with the specified name.
    #[schema(rename = "E5")]
    EmployeeNotFoundByName,
    /// Salary is required.
    #[schema(rename = "E6")]
    MissingOrInvalidSalary,
    /// Salary cannot be a negative value.
    #[schema(rename = "E7")]
    NegativeSalaryNotAllowed,
    /// Title is required.
    #[schema(rename = "E8")]
    MissingOrInvalidTitle,
    /// Age is required.
    #[schema(rename = "E9")]
    MissingOrInvalidAge,
    /// Age must be greater than 15 and less than 76.
    #[schema(rename = "E11")]
    InvalidAgeLimit,
    /// Failed to make the REST API request.
    #[schema(rename = "E12")]
    UpstreamCallFailed,
    /// Employee api rate limit exceeded.
    #[schema(rename = "E13")]
    RateLimited,
    /// Request body must be a JSON object.
    #[schema(rename = "E14")]
    MalformedRequestBody,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable short fault code.
    #[schema(example = "E4")]
    error: FaultCodeSchema,
    /// Human-readable message for the fault.
    #[schema(example = "Name is required")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(rename = "traceId", example = "6f1c1b2e-8f6f-4b7a-9d2c-1a2b3c4d5e6f")]
    trace_id: Option<String>,
    /// Supplementary details; never present on internal faults.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Employee)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    /// Upstream-assigned identifier.
    #[schema(example = "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507")]
    id: String,
    #[schema(example = "Shivam Sapate")]
    name: String,
    #[schema(example = 50000)]
    salary: u64,
    #[schema(example = 25)]
    age: u32,
    #[schema(example = "Software Engineer")]
    title: String,
    /// Present when the upstream supplied one.
    email: Option<String>,
}

/// OpenAPI schema for the create request body.
///
/// The body is accepted as an untyped object and validated field by field,
/// so every property is documented as optional.
#[derive(ToSchema)]
#[schema(as = crate::domain::RawEmployeeInput)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeInputSchema {
    /// Non-blank name.
    #[schema(example = "Shivam Sapate")]
    name: Option<String>,
    /// Non-negative integer.
    #[schema(example = 50000)]
    salary: Option<i64>,
    /// Integer between 16 and 75 inclusive.
    #[schema(example = 25)]
    age: Option<i64>,
    /// Non-blank job title.
    #[schema(example = "Software Engineer")]
    title: Option<String>,
}

/// OpenAPI schema for [`crate::domain::DeletionOutcome`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DeletionOutcome)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeletionOutcomeSchema {
    /// Whether the upstream reported the record as removed.
    success: bool,
}
