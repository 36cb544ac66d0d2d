//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod employees;
pub mod health;
pub mod users;

pub use employees::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    list_employees_handler, update_employee_handler,
};
pub use health::health_handler;
pub use users::{login_handler, register_handler};
