//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use pmdweb_core::error::CoreError;

use crate::auth::jwt::{validate_token, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated admin, extracted from an `Authorization: Bearer` header.
///
/// A missing or malformed header is rejected with 401; a token with a bad
/// signature, an expired token, or one issued for another username with 403.
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(username = %admin.claims.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub claims: Claims,
}

/// Pull the raw token out of the request headers.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Token required".into())))
}

/// Validate a token and check that it names the configured admin.
pub fn admin_claims(token: &str, state: &AppState) -> Result<Claims, AppError> {
    let claims = validate_token(token, &state.config.jwt)
        .map_err(|_| AppError::Core(CoreError::Forbidden("Invalid token".into())))?;

    if claims.username != state.credentials.username() {
        return Err(AppError::Core(CoreError::Forbidden("Invalid token".into())));
    }
    Ok(claims)
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = admin_claims(token, state)?;
        Ok(AdminUser { claims })
    }
}
