//! Repository for the `journals` table.

use pmdweb_core::types::DbId;
use sqlx::PgPool;

use crate::models::journal::{Journal, JournalInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, month, title, text, hyperlink, created_at, updated_at";

/// Provides CRUD operations for journals.
pub struct JournalRepo;

impl JournalRepo {
    /// List all journals, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Journal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journals ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Journal>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Journal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journals WHERE id = $1");
        sqlx::query_as::<_, Journal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &JournalInput) -> Result<Journal, sqlx::Error> {
        let query = format!(
            "INSERT INTO journals (month, title, text, hyperlink) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Journal>(&query)
            .bind(&input.month)
            .bind(&input.title)
            .bind(&input.text)
            .bind(&input.hyperlink)
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields of a journal. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &JournalInput,
    ) -> Result<Option<Journal>, sqlx::Error> {
        let query = format!(
            "UPDATE journals SET month = $2, title = $3, text = $4, hyperlink = $5, \
             updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Journal>(&query)
            .bind(id)
            .bind(&input.month)
            .bind(&input.title)
            .bind(&input.text)
            .bind(&input.hyperlink)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Journal>, sqlx::Error> {
        let query = format!("DELETE FROM journals WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Journal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
