//! API route configuration.

use crate::api::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    list_employees_handler, login_handler, register_handler, update_employee_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /employees`        - Create an employee
/// - `GET    /employees`        - List all employees
/// - `GET    /employees/{id}`   - Fetch one employee
/// - `PUT    /employees/{id}`   - Replace an employee
/// - `DELETE /employees/{id}`   - Delete an employee
/// - `POST   /users/register`   - Register a user
/// - `POST   /users/login`      - Check credentials
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/users/register", post(register_handler))
        .route("/users/login", post(login_handler))
}
