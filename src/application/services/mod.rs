//! Business logic services for the application layer.

pub mod employee_service;
pub mod user_service;

pub use employee_service::EmployeeService;
pub use user_service::{INVALID_CREDENTIALS, RegisterUser, UserService};
