//! DTOs for `GET /health`.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Outcome of one dependency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DependencyCheck,
}

#[derive(Debug, Serialize)]
pub struct DependencyCheck {
    pub status: CheckOutcome,
    pub message: String,
}

impl DependencyCheck {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckOutcome::Ok,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CheckOutcome::Error,
            message: message.into(),
        }
    }
}
