//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every employee endpoint together with the schema
//! wrappers from [`crate::inbound::http::schemas`], which document domain
//! types without coupling them to utoipa.
//!
//! The generated document backs Swagger UI (debug builds) and is exported by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    DeletionOutcomeSchema, EmployeeInputSchema, EmployeeSchema, ErrorSchema, FaultCodeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee API",
        description = "Facade over the upstream employee service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::search_employees,
        crate::inbound::http::employees::highest_salary,
        crate::inbound::http::employees::top_ten_earners,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::delete_employee,
    ),
    components(schemas(
        EmployeeSchema,
        EmployeeInputSchema,
        DeletionOutcomeSchema,
        ErrorSchema,
        FaultCodeSchema
    )),
    tags(
        (name = "employees", description = "Employee records held by the upstream service")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Structural checks on the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const EMPLOYEE_SCHEMA_NAME: &str = "crate.domain.Employee";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/employees")]
    #[case("/api/v1/employees/search/{text}")]
    #[case("/api/v1/employees/highestSalary")]
    #[case("/api/v1/employees/topTenHighestEarningEmployeeNames")]
    #[case("/api/v1/employees/{id}")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn error_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "error");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn employee_schema_has_record_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let employee_schema = schemas.get(EMPLOYEE_SCHEMA_NAME).expect("Employee schema");

        for field in ["id", "name", "salary", "age", "title"] {
            assert_object_schema_has_field(employee_schema, field);
        }
    }
}
