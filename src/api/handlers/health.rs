//! Handler for `GET /health`.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    CheckOutcome, DependencyCheck, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::state::AppState;

/// Reports whether the service can reach its database.
///
/// # Response Codes
///
/// - **200 OK**: database answered
/// - **503 Service Unavailable**: database query failed
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "database": { "status": "ok", "message": "12 employees" } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.employee_service.count_employees().await {
        Ok(count) => DependencyCheck::ok(format!("{count} employees")),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unreachable");
            DependencyCheck::failed(e.to_string())
        }
    };

    let (code, status) = match database.status {
        CheckOutcome::Ok => (StatusCode::OK, ServiceStatus::Healthy),
        CheckOutcome::Error => (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded),
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database },
    };

    (code, Json(body))
}
