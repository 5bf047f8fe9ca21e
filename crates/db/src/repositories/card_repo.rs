//! Repository for the `cards` table.

use pmdweb_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::{Card, CardInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, text, hyperlink, created_at, updated_at";

/// Provides CRUD operations for cards.
pub struct CardRepo;

impl CardRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Card>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CardInput) -> Result<Card, sqlx::Error> {
        let query = format!(
            "INSERT INTO cards (title, text, hyperlink) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
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
        input: &CardInput,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET title = $2, text = $3, hyperlink = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.text)
            .bind(&input.hyperlink)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("DELETE FROM cards WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
