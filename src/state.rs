//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{EmployeeService, UserService};
use crate::domain::repositories::{EmployeeRepository, UserRepository};

/// Services behind trait-object repositories, so the same handlers run
/// against PostgreSQL in production and in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService<dyn EmployeeRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        employee_repository: Arc<dyn EmployeeRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            employee_service: Arc::new(EmployeeService::new(employee_repository)),
            user_service: Arc::new(UserService::new(user_repository)),
        }
    }
}
