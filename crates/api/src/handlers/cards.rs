use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pmdweb_core::error::CoreError;
use pmdweb_core::types::DbId;
use pmdweb_db::models::card::{Card, CardInput};
use pmdweb_db::repositories::CardRepo;
use serde::Serialize;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Card", id })
}

/// GET /api/cards
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(CardRepo::list(&state.pool).await?))
}

/// GET /api/cards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(card))
}

/// POST /api/cards
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CardInput>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized();
    validate_input(&input)?;

    let card = CardRepo::create(&state.pool, &input).await?;
    tracing::info!(card_id = card.id, username = %admin.claims.username, "Card created");
    Ok((StatusCode::CREATED, Json(card)))
}

/// PUT /api/cards/{id}
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CardInput>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized();
    validate_input(&input)?;

    let card = CardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(card_id = id, username = %admin.claims.username, "Card updated");
    Ok(Json(card))
}

#[derive(Debug, Serialize)]
pub struct DeletedCard {
    pub message: &'static str,
    pub card: Card,
}

/// DELETE /api/cards/{id}
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let card = CardRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(card_id = id, username = %admin.claims.username, "Card deleted");
    Ok(Json(DeletedCard {
        message: "Card deleted successfully",
        card,
    }))
}
