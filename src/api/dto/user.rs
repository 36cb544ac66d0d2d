//! DTOs for registration and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::application::services::RegisterUser;
use crate::domain::entities::User;

/// Request body for `POST /api/users/register`.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationRequest {
    #[validate(
        length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"),
        custom(function = "not_blank")
    )]
    pub username: String,

    #[validate(email(message = "Email should be valid"))]
    pub email: String,

    #[validate(
        length(min = 6, message = "Password must be at least 6 characters"),
        custom(function = "not_blank")
    )]
    pub password: String,

    #[validate(
        length(max = 50, message = "First name must be at most 50 characters"),
        custom(function = "not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(max = 50, message = "Last name must be at most 50 characters"),
        custom(function = "not_blank")
    )]
    pub last_name: String,
}

impl From<UserRegistrationRequest> for RegisterUser {
    fn from(r: UserRegistrationRequest) -> Self {
        RegisterUser {
            username: r.username,
            email: r.email,
            password: r.password,
            first_name: r.first_name,
            last_name: r.last_name,
        }
    }
}

/// Response for a successful registration. Never carries the password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl From<User> for UserRegistrationResponse {
    fn from(u: User) -> Self {
        UserRegistrationResponse {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
            message: "User registered successfully!".to_string(),
        }
    }
}

/// Request body for `POST /api/users/login`.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Response for a successful login. No token is issued.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for LoginResponse {
    fn from(u: User) -> Self {
        LoginResponse {
            success: true,
            message: "Login successful!".to_string(),
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        User {
            id: 3,
            username: "ada".to_string(),
            email: "ada@x.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_registration_response_omits_password() {
        let value = serde_json::to_value(UserRegistrationResponse::from(user())).unwrap();

        assert_eq!(value["message"], "User registered successfully!");
        assert_eq!(value["firstName"], "Ada");
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
        assert!(!value.to_string().contains("argon2"));
    }

    #[test]
    fn test_login_response_shape() {
        let value = serde_json::to_value(LoginResponse::from(user())).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Login successful!");
        assert_eq!(value["lastName"], "Lovelace");
        assert!(!value.to_string().contains("argon2"));
    }

    #[test]
    fn test_registration_validation() {
        let req: UserRegistrationRequest = serde_json::from_value(json!({
            "username": "  ",
            "email": "bad",
            "password": "123",
            "firstName": "Ada",
            "lastName": "Lovelace"
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn test_login_requires_non_blank_fields() {
        let req: LoginRequest =
            serde_json::from_value(json!({"username": "ada", "password": " "})).unwrap();

        assert!(req.validate().is_err());
    }
}
