//! Handlers for employee CRUD endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::employee::{EmployeeRequest, EmployeeResponse};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Creates an employee.
///
/// # Endpoint
///
/// `POST /api/employees`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if the email is already in use.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    let employee = state.employee_service.create_employee(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Returns a single employee.
///
/// # Endpoint
///
/// `GET /api/employees/{id}`
///
/// # Errors
///
/// Returns 404 if the employee does not exist.
pub async fn get_employee_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state.employee_service.get_employee(id).await?;

    Ok(Json(employee.into()))
}

/// Lists all employees in insertion order.
///
/// # Endpoint
///
/// `GET /api/employees`
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = state.employee_service.list_employees().await?;

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// Replaces every field of an employee.
///
/// # Endpoint
///
/// `PUT /api/employees/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the employee does not exist.
/// Returns 409 if the new email belongs to another employee.
pub async fn update_employee_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state
        .employee_service
        .update_employee(id, payload.into())
        .await?;

    Ok(Json(employee.into()))
}

/// Deletes an employee.
///
/// # Endpoint
///
/// `DELETE /api/employees/{id}`
///
/// # Errors
///
/// Returns 404 if the employee does not exist.
pub async fn delete_employee_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
