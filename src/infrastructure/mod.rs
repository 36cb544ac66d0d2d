//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer on top of
//! PostgreSQL ([`persistence`]).

pub mod persistence;
