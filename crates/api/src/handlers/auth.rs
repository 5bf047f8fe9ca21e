//! Handlers for the `/auth` resource (login, verify).

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use pmdweb_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_token, Claims};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{admin_claims, bearer_token};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub message: &'static str,
}

/// Response for `POST /auth/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: Claims,
}

/// POST /api/auth/login
///
/// Check the supplied pair against the provisioned admin credential and
/// issue a signed bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if input.username.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username and password are required".into(),
        )));
    }

    let valid = state
        .credentials
        .verify(&input.username, &input.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !valid {
        tracing::warn!(username = %input.username, "Rejected login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let username = state.credentials.username().to_string();
    let token = generate_token(&username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(%username, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        username,
        message: "Login successful",
    }))
}

/// POST /api/auth/verify
///
/// Report whether the bearer token is valid and return its claims.
/// Missing token -> 401; bad or expired token, or one issued for another
/// username -> 403.
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<VerifyResponse>> {
    let token = bearer_token(&headers)?;
    let claims = admin_claims(token, &state)?;

    Ok(Json(VerifyResponse {
        valid: true,
        user: claims,
    }))
}
