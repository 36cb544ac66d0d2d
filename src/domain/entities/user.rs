//! User account entity.

use chrono::{DateTime, Utc};
use std::fmt;

/// A registered user.
///
/// `password_hash` holds an Argon2id PHC string; the plaintext password is
/// never stored.
#[derive(Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[HASH]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Input data for inserting a user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password_hash() {
        let user = User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@x.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            created_at: Utc::now(),
        };

        let out = format!("{user:?}");
        assert!(out.contains("ada@x.com"));
        assert!(!out.contains("secret"));
    }
}
