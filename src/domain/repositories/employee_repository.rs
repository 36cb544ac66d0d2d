//! Repository trait for employee records.

use crate::domain::entities::{Employee, EmployeeDetails};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing employees.
///
/// Implementations must enforce email uniqueness at the storage level and
/// report a violation as [`AppError::Conflict`], so that a concurrent insert
/// racing past the service pre-check is still rejected.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEmployeeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new employee and returns it with store-assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, AppError>;

    /// Finds an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Lists all employees in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    /// Checks whether any employee uses the given email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Overwrites every mutable field of an employee and bumps `updated_at`.
    ///
    /// Returns `None` if no employee has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email belongs to another employee.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, details: EmployeeDetails)
    -> Result<Option<Employee>, AppError>;

    /// Deletes an employee. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored employees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
