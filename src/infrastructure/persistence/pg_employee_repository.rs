//! PostgreSQL implementation of the employee repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Employee, EmployeeDetails};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const EMAIL_CONSTRAINT: &str = "employees_email_key";

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    department: String,
    position: String,
    salary: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(r: EmployeeRow) -> Self {
        Employee {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone_number: r.phone_number,
            department: r.department,
            position: r.position,
            salary: r.salary,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for employees.
///
/// Email uniqueness is guaranteed by the `employees_email_key` constraint;
/// a violation surfaces as [`AppError::Conflict`].
pub struct PgEmployeeRepository {
    pool: Arc<PgPool>,
}

impl PgEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, email: &str) -> AppError {
    if is_unique_violation_on(&e, EMAIL_CONSTRAINT) {
        return AppError::conflict(
            format!("Employee with email {email} already exists"),
            json!({ "email": email }),
        );
    }

    e.into()
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (first_name, last_name, email, phone_number, department, position, salary)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, phone_number, department, position, salary, created_at, updated_at
            "#,
        )
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.email)
        .bind(&details.phone_number)
        .bind(&details.department)
        .bind(&details.position)
        .bind(details.salary)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, &details.email))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, department, position, salary, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, department, position, salary, created_at, updated_at
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE email = $1)")
                .bind(email)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn update(
        &self,
        id: i64,
        details: EmployeeDetails,
    ) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees SET
                first_name   = $2,
                last_name    = $3,
                email        = $4,
                phone_number = $5,
                department   = $6,
                position     = $7,
                salary       = $8,
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone_number, department, position, salary, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.email)
        .bind(&details.phone_number)
        .bind(&details.department)
        .bind(&details.position)
        .bind(details.salary)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, &details.email))?;

        Ok(row.map(Employee::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
