//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`EmployeeRepository`] - Employee CRUD
//! - [`UserRepository`] - User registration and lookup
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod employee_repository;
pub mod user_repository;

pub use employee_repository::EmployeeRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
