//! Application layer services implementing business logic.
//!
//! Services consume repository traits, enforce business rules and return
//! domain entities to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::employee_service::EmployeeService`] - Employee CRUD with email uniqueness
//! - [`services::user_service::UserService`] - Registration and login
//!
//! Password hashing lives in [`password`].

pub mod password;
pub mod services;
