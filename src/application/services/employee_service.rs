//! Employee CRUD service.

use crate::domain::entities::{Employee, EmployeeDetails};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing employee records.
///
/// Enforces email uniqueness before every write. The repository backs this
/// up with a schema-level constraint, so a concurrent writer that slips past
/// the pre-check still gets [`AppError::Conflict`].
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    /// Creates a new employee service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, AppError> {
        if self.repository.exists_by_email(&details.email).await? {
            return Err(duplicate_email(&details.email));
        }

        let employee = self.repository.insert(details).await?;
        tracing::info!(employee_id = employee.id, "employee created");

        Ok(employee)
    }

    /// Retrieves an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no employee has this id.
    pub async fn get_employee(&self, id: i64) -> Result<Employee, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// Lists every employee in insertion order.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.list().await
    }

    /// Overwrites all fields of an existing employee.
    ///
    /// Keeping the current email is always allowed; switching to an email
    /// owned by someone else is not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no employee has this id.
    /// Returns [`AppError::Conflict`] if the new email is taken.
    pub async fn update_employee(
        &self,
        id: i64,
        details: EmployeeDetails,
    ) -> Result<Employee, AppError> {
        let current = self.get_employee(id).await?;

        if current.email != details.email
            && self.repository.exists_by_email(&details.email).await?
        {
            return Err(duplicate_email(&details.email));
        }

        let updated = self
            .repository
            .update(id, details)
            .await?
            .ok_or_else(|| employee_not_found(id))?;
        tracing::info!(employee_id = id, "employee updated");

        Ok(updated)
    }

    /// Deletes an employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no employee has this id, including
    /// when it was already deleted.
    pub async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(employee_not_found(id));
        }

        tracing::info!(employee_id = id, "employee deleted");
        Ok(())
    }

    /// Counts stored employees.
    pub async fn count_employees(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn employee_not_found(id: i64) -> AppError {
    AppError::not_found(
        format!("Employee not found with id: {id}"),
        json!({ "id": id }),
    )
}

fn duplicate_email(email: &str) -> AppError {
    AppError::conflict(
        format!("Employee with email {email} already exists"),
        json!({ "email": email }),
    )
}
