//! HTTP middleware for request processing.
//!
//! Provides observability and CORS layers.

pub mod cors;
pub mod tracing;
