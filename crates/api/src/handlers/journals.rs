//! Handlers for the `/journals` resource.
//!
//! Journals carry a free-text `month` label that the home page groups by.
//! Both `month` and `title` are required on create and on replace.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pmdweb_core::error::CoreError;
use pmdweb_core::types::DbId;
use pmdweb_db::models::journal::{Journal, JournalInput};
use pmdweb_db::repositories::JournalRepo;
use serde::Serialize;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `DELETE /api/journals/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedJournal {
    pub message: &'static str,
    pub journal: Journal,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Journal",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/journals
///
/// All journals, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let journals = JournalRepo::list(&state.pool).await?;
    Ok(Json(journals))
}

/// GET /api/journals/{id}
///
/// A single journal, or 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let journal = JournalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(journal))
}

/// POST /api/journals
///
/// Create a journal. Blank `text` / `hyperlink` are stored as NULL.
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<JournalInput>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized();
    validate_input(&input)?;

    let journal = JournalRepo::create(&state.pool, &input).await?;

    tracing::info!(
        journal_id = journal.id,
        month = %journal.month,
        username = %admin.claims.username,
        "Journal created"
    );
    Ok((StatusCode::CREATED, Json(journal)))
}

/// PUT /api/journals/{id}
///
/// Replace a journal's month, title, text, and hyperlink.
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<JournalInput>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized();
    validate_input(&input)?;

    let journal = JournalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(journal_id = id, username = %admin.claims.username, "Journal updated");
    Ok(Json(journal))
}

/// DELETE /api/journals/{id}
///
/// Delete a journal and echo the removed row.
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let journal = JournalRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(journal_id = id, username = %admin.claims.username, "Journal deleted");
    Ok(Json(DeletedJournal {
        message: "Journal deleted successfully",
        journal,
    }))
}
