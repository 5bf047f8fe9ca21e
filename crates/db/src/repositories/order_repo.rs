//! Repository for the `orders` table.

use pmdweb_core::pagination::PageRequest;
use pmdweb_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, UpdateOrder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, year, title, category, date, link, file_path, \
    display_order, created_at, updated_at";

/// Display sequence: newest year first, then curated order, then newest row.
const DISPLAY_ORDER: &str = "year DESC, display_order ASC, created_at DESC, id DESC";

/// Optional year filter shared by the page and count queries.
const YEAR_FILTER: &str = "($1::TEXT IS NULL OR year = $1)";

/// Provides CRUD and listing operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Fetch one page of orders (optionally for a single year) and the total
    /// number of matching rows. Both queries run concurrently.
    pub async fn list_page(
        pool: &PgPool,
        year: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<Order>, i64), sqlx::Error> {
        let data_query = format!(
            "SELECT {COLUMNS} FROM orders WHERE {YEAR_FILTER} \
             ORDER BY {DISPLAY_ORDER} LIMIT $2 OFFSET $3"
        );
        let count_query = format!("SELECT COUNT(*) FROM orders WHERE {YEAR_FILTER}");

        let rows = sqlx::query_as::<_, Order>(&data_query)
            .bind(year)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool);
        let count = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(year)
            .fetch_one(pool);

        tokio::try_join!(rows, count)
    }

    /// Every order in display sequence, unpaginated.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY {DISPLAY_ORDER}");
        sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
    }

    /// Distinct years, newest first.
    pub async fn list_years(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT year FROM orders ORDER BY year DESC")
            .fetch_all(pool)
            .await
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new order, resolving its destination into `link` / `file_path`.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let columns = input.destination.clone().into_columns();
        let query = format!(
            "INSERT INTO orders (year, title, category, date, link, file_path, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(&input.year)
            .bind(&input.title)
            .bind(input.category.as_str())
            .bind(&input.date)
            .bind(columns.link)
            .bind(columns.file_path)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Update an order. Only non-`None` fields in `input` are applied; a
    /// supplied destination overwrites both `link` and `file_path`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrder,
    ) -> Result<Option<Order>, sqlx::Error> {
        let set_destination = input.destination.is_some();
        let columns = input
            .destination
            .clone()
            .map(|d| d.into_columns())
            .unwrap_or_default();

        let query = format!(
            "UPDATE orders SET
                year = COALESCE($2, year),
                title = COALESCE($3, title),
                category = COALESCE($4, category),
                date = COALESCE($5, date),
                link = CASE WHEN $6 THEN $7 ELSE link END,
                file_path = CASE WHEN $6 THEN $8 ELSE file_path END,
                display_order = COALESCE($9, display_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(&input.year)
            .bind(&input.title)
            .bind(input.category.map(|c| c.as_str()))
            .bind(&input.date)
            .bind(set_destination)
            .bind(columns.link)
            .bind(columns.file_path)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an order, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("DELETE FROM orders WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
