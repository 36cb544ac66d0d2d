//! Handlers for user registration and login.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::user::{
    LoginRequest, LoginResponse, UserRegistrationRequest, UserRegistrationResponse,
};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users/register`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if the username or email is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRegistrationRequest>,
) -> Result<(StatusCode, Json<UserRegistrationResponse>), AppError> {
    let user = state.user_service.register_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Checks credentials.
///
/// # Endpoint
///
/// `POST /api/users/login`
///
/// No session or token is issued; a 200 with `success: true` is the whole
/// contract.
///
/// # Errors
///
/// Returns 404 with "Invalid username or password" for an unknown user and
/// for a wrong password alike.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .user_service
        .login_user(&payload.username, &payload.password)
        .await?;

    Ok(Json(user.into()))
}
