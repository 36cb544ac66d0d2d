//! User registration and login service.

use crate::application::password::{DUMMY_HASH, hash_password, verify_password};
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Registration input carrying the plaintext password.
#[derive(Clone)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Service for user registration and credential checks.
///
/// Passwords are hashed with Argon2id before they reach the repository and
/// are verified against the stored hash on login. Hashing runs on the
/// blocking thread pool.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    verify: fn(&str, &str) -> bool,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            verify: verify_password,
        }
    }

    #[cfg(test)]
    fn with_verifier(repository: Arc<R>, verify: fn(&str, &str) -> bool) -> Self {
        Self { repository, verify }
    }

    /// Registers a new user.
    ///
    /// Username and email are both checked before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or the email is taken.
    /// Returns [`AppError::Internal`] if hashing or the database fails.
    pub async fn register_user(&self, input: RegisterUser) -> Result<User, AppError> {
        if self.repository.exists_by_username(&input.username).await? {
            return Err(AppError::conflict(
                format!("Username already exists: {}", input.username),
                json!({ "username": input.username }),
            ));
        }

        if self.repository.exists_by_email(&input.email).await? {
            return Err(AppError::conflict(
                format!("Email already exists: {}", input.email),
                json!({ "email": input.email }),
            ));
        }

        let password_hash = hash_blocking(input.password).await?;

        let user = self
            .repository
            .insert(NewUser {
                username: input.username,
                email: input.email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
            })
            .await?;
        tracing::info!(user_id = user.id, username = %user.username, "user registered");

        Ok(user)
    }

    /// Checks a username/password pair.
    ///
    /// An unknown username and a wrong password fail with the same
    /// [`INVALID_CREDENTIALS`] message, and both pay for one Argon2
    /// verification: an unknown user is checked against [`DUMMY_HASH`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the credentials do not match.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            verify_blocking(self.verify, password.to_string(), DUMMY_HASH.to_string()).await?;
            tracing::warn!("login rejected");
            return Err(invalid_credentials());
        };

        let hash = user.password_hash.clone();
        if !verify_blocking(self.verify, password.to_string(), hash).await? {
            tracing::warn!("login rejected");
            return Err(invalid_credentials());
        }

        tracing::info!(user_id = user.id, "user logged in");
        Ok(user)
    }

    /// Counts registered users.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn invalid_credentials() -> AppError {
    AppError::not_found(INVALID_CREDENTIALS, json!({}))
}

async fn hash_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| {
            AppError::internal(
                "Password hashing task failed",
                json!({"reason": e.to_string()}),
            )
        })?
        .map_err(|e| AppError::internal("Password hashing failed", json!({"reason": e.to_string()})))
}

async fn verify_blocking(
    verify: fn(&str, &str) -> bool,
    password: String,
    hash: String,
) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify(&password, &hash))
        .await
        .map_err(|e| {
            AppError::internal(
                "Password verification task failed",
                json!({"reason": e.to_string()}),
            )
        })
}
