//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgEmployeeRepository`] - Employee storage
//! - [`PgUserRepository`] - User accounts

pub mod pg_employee_repository;
pub mod pg_user_repository;

pub use pg_employee_repository::PgEmployeeRepository;
pub use pg_user_repository::PgUserRepository;
