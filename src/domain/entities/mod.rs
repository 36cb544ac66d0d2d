//! Core domain entities.
//!
//! Entities are plain data structures owned by the persistence layer. Input
//! shapes are kept separate from stored records:
//!
//! - [`EmployeeDetails`] - caller-supplied employee fields (insert and full overwrite)
//! - [`NewUser`] - user fields with the password already hashed
//!
//! Employees and users are independent aggregates with no relationship.

pub mod employee;
pub mod user;

pub use employee::{Employee, EmployeeDetails};
pub use user::{NewUser, User};
