#![allow(dead_code)]

use async_trait::async_trait;
use axum::{ServiceExt, extract::Request};
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, Mutex};

use employee_management::domain::entities::{Employee, EmployeeDetails, NewUser, User};
use employee_management::domain::repositories::{EmployeeRepository, UserRepository};
use employee_management::error::AppError;
use employee_management::routes::app_router;
use employee_management::state::AppState;

/// Employee store backed by a vector, enforcing the same email uniqueness
/// as the `employees_email_key` constraint.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: Mutex<Vec<Employee>>,
    next_id: Mutex<i64>,
}

fn email_conflict(email: &str) -> AppError {
    AppError::conflict(
        format!("Employee with email {email} already exists"),
        json!({ "email": email }),
    )
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|e| e.email == details.email) {
            return Err(email_conflict(&details.email));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let now = Utc::now();
        let employee = Employee {
            id: *next_id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone_number: details.phone_number,
            department: details.department,
            position: details.position,
            salary: details.salary,
            created_at: now,
            updated_at: now,
        };
        rows.push(employee.clone());

        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|e| e.email == email))
    }

    async fn update(
        &self,
        id: i64,
        details: EmployeeDetails,
    ) -> Result<Option<Employee>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|e| e.id != id && e.email == details.email)
        {
            return Err(email_conflict(&details.email));
        }

        let Some(employee) = rows.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        employee.first_name = details.first_name;
        employee.last_name = details.last_name;
        employee.email = details.email;
        employee.phone_number = details.phone_number;
        employee.department = details.department;
        employee.position = details.position;
        employee.salary = details.salary;
        employee.updated_at = Utc::now();

        Ok(Some(employee.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

/// User store enforcing unique usernames and emails.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::conflict(
                format!("Username already exists: {}", new_user.username),
                json!({}),
            ));
        }
        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                format!("Email already exists: {}", new_user.email),
                json!({}),
            ));
        }

        let user = User {
            id: rows.len() as i64 + 1,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            created_at: Utc::now(),
        };
        rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|u| u.email == email))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

/// Employee store whose every call fails, standing in for an unreachable database.
pub struct UnavailableEmployeeRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl EmployeeRepository for UnavailableEmployeeRepository {
    async fn insert(&self, _details: EmployeeDetails) -> Result<Employee, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Employee>, AppError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Err(unavailable())
    }

    async fn exists_by_email(&self, _email: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: i64,
        _details: EmployeeDetails,
    ) -> Result<Option<Employee>, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryEmployeeRepository::default()),
        Arc::new(InMemoryUserRepository::default()),
    )
}

/// Serves the production router, middleware included.
pub fn make_server(state: AppState) -> TestServer {
    let app = app_router(state);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn ada() -> serde_json::Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@x.com",
        "phoneNumber": "123",
        "department": "Eng",
        "position": "Engineer",
        "salary": 100000
    })
}

pub fn grace() -> serde_json::Value {
    json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@x.com",
        "phoneNumber": "456",
        "department": "Navy",
        "position": "Rear Admiral",
        "salary": 120000
    })
}

pub fn alice() -> serde_json::Value {
    json!({
        "username": "alice",
        "email": "alice@x.com",
        "password": "secret1",
        "firstName": "Alice",
        "lastName": "Smith"
    })
}
