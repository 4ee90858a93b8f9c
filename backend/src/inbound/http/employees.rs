//! Employee HTTP handlers.
//!
//! ```text
//! GET    /api/v1/employees
//! GET    /api/v1/employees/search/{text}
//! GET    /api/v1/employees/highestSalary
//! GET    /api/v1/employees/topTenHighestEarningEmployeeNames
//! GET    /api/v1/employees/{id}
//! POST   /api/v1/employees {"name":"A","salary":70000,"age":40,"title":"Accountant"}
//! DELETE /api/v1/employees/{id}
//! ```
//!
//! Handlers pass path values through untouched; blank ids and create-body
//! rules are decided by the domain.

use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::{Value, json};

use crate::domain::{DeletionOutcome, Employee, Error, FaultCode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    DeletionOutcomeSchema, EmployeeInputSchema, EmployeeSchema, ErrorSchema,
};
use crate::inbound::http::state::HttpState;

/// Register the employee routes.
///
/// Literal paths go first so `highestSalary` and friends are never captured
/// by `/employees/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_employees)
        .service(search_employees)
        .service(highest_salary)
        .service(top_ten_earners)
        .service(get_employee)
        .service(create_employee)
        .service(delete_employee);
}

/// List every employee held by the upstream.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeSchema]),
        (status = 404, description = "No employees", body = ErrorSchema),
        (status = 429, description = "Upstream rate limit", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    Ok(web::Json(state.employees.list_employees().await?))
}

/// Employees whose name contains the given text.
#[utoipa::path(
    get,
    path = "/api/v1/employees/search/{text}",
    params(("text" = String, Path, description = "Case-sensitive name fragment")),
    responses(
        (status = 200, description = "Matching employees", body = [EmployeeSchema]),
        (status = 404, description = "No employees or no match", body = ErrorSchema),
        (status = 429, description = "Upstream rate limit", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "searchEmployeesByName"
)]
#[get("/employees/search/{text}")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    text: web::Path<String>,
) -> ApiResult<web::Json<Vec<Employee>>> {
    Ok(web::Json(state.employees.search_by_name(&text).await?))
}

/// Highest salary across all employees.
#[utoipa::path(
    get,
    path = "/api/v1/employees/highestSalary",
    responses(
        (status = 200, description = "Highest salary", body = u64),
        (status = 404, description = "No employees", body = ErrorSchema),
        (status = 429, description = "Upstream rate limit", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "highestSalary"
)]
#[get("/employees/highestSalary")]
pub async fn highest_salary(state: web::Data<HttpState>) -> ApiResult<web::Json<u64>> {
    Ok(web::Json(state.employees.highest_salary().await?))
}

/// The ten best-paid employees, highest salary first.
#[utoipa::path(
    get,
    path = "/api/v1/employees/topTenHighestEarningEmployeeNames",
    responses(
        (status = 200, description = "Top earners", body = [EmployeeSchema]),
        (status = 404, description = "No employees", body = ErrorSchema),
        (status = 429, description = "Upstream rate limit", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "topTenHighestEarningEmployees"
)]
#[get("/employees/topTenHighestEarningEmployeeNames")]
pub async fn top_ten_earners(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Employee>>> {
    Ok(web::Json(state.employees.top_ten_by_earnings().await?))
}

/// Fetch one employee by upstream id.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(("id" = String, Path, description = "Upstream employee id")),
    responses(
        (status = 200, description = "Employee", body = EmployeeSchema),
        (status = 400, description = "Blank id", body = ErrorSchema),
        (status = 404, description = "No such employee", body = ErrorSchema),
        (status = 429, description = "Upstream rate limit", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Employee>> {
    Ok(web::Json(state.employees.employee_by_id(&id).await?))
}

fn require_object(body: Value) -> Result<serde_json::Map<String, Value>, Error> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(Error::from(FaultCode::MalformedRequestBody)
            .with_details(json!({ "reason": "expected a JSON object" }))),
    }
}

/// Validate the body and create the employee upstream.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = EmployeeInputSchema,
    responses(
        (status = 201, description = "Created employee", body = EmployeeSchema),
        (status = 400, description = "Validation failure", body = ErrorSchema),
        (status = 429, description = "Upstream rate limit", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let input = require_object(payload.into_inner())?;
    let employee = state.employee_commands.create_employee(&input).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Delete an employee by id.
///
/// The upstream deletes by name, so the record is looked up first; a rename
/// or removal between the two calls surfaces as a failure.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = String, Path, description = "Upstream employee id")),
    responses(
        (status = 200, description = "Deletion outcome", body = DeletionOutcomeSchema),
        (status = 400, description = "Blank id", body = ErrorSchema),
        (status = 404, description = "No such employee", body = ErrorSchema),
        (status = 429, description = "Upstream rate limit", body = ErrorSchema),
        (status = 500, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<DeletionOutcome>> {
    Ok(web::Json(state.employee_commands.delete_employee(&id).await?))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
