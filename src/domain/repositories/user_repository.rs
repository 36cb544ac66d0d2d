//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing users.
///
/// Username and email are each unique; implementations report a violation
/// as [`AppError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Checks whether the username is taken.
    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError>;

    /// Checks whether the email is taken.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Counts registered users.
    async fn count(&self) -> Result<i64, AppError>;
}
