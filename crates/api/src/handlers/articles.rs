//! Handlers for the `/articles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pmdweb_core::error::CoreError;
use pmdweb_core::types::DbId;
use pmdweb_db::models::article::{Article, ArticleInput};
use pmdweb_db::repositories::ArticleRepo;
use serde::Serialize;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Article",
        id,
    })
}

/// GET /api/articles
///
/// All articles, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(Json(articles))
}

/// GET /api/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(article))
}

/// POST /api/articles
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<ArticleInput>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized();
    validate_input(&input)?;

    let article = ArticleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        article_id = article.id,
        username = %admin.claims.username,
        "Article created"
    );
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/articles/{id}
///
/// Replaces title, text, and hyperlink.
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ArticleInput>,
) -> AppResult<impl IntoResponse> {
    let input = input.normalized();
    validate_input(&input)?;

    let article = ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(article_id = id, username = %admin.claims.username, "Article updated");
    Ok(Json(article))
}

#[derive(Debug, Serialize)]
pub struct DeletedArticle {
    pub message: &'static str,
    pub article: Article,
}

/// DELETE /api/articles/{id}
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = ArticleRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(article_id = id, username = %admin.claims.username, "Article deleted");
    Ok(Json(DeletedArticle {
        message: "Article deleted successfully",
        article,
    }))
}
