//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check (database)
//! - `/api/*`        - REST API, see [`crate::api::routes::api_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin allowed on the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes().layer(middleware::cors::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(middleware::tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
