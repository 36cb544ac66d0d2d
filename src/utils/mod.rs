//! Shared helpers.
//!
//! - [`db_error`] - Unique-constraint detection on `sqlx` errors

pub mod db_error;
