//! Repository for the `articles` table.

use pmdweb_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, ArticleInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, text, hyperlink, created_at, updated_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List all articles, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &ArticleInput) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, text, hyperlink) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.text)
            .bind(&input.hyperlink)
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields of a row. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArticleInput,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET title = $2, text = $3, hyperlink = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.text)
            .bind(&input.hyperlink)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a row, returning it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("DELETE FROM articles WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
