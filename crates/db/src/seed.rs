//! Seeding of the historical order registry.
//!
//! The bundled `seeds/legacy_orders.json` lists orders grouped by year in
//! their original on-page sequence. Each row is inserted with
//! `display_order` = its 1-based position within the year. Rows that already
//! exist (same year, title, and link) are skipped, so the seed is idempotent.

use pmdweb_core::order::OrderCategory;
use serde::Deserialize;
use sqlx::PgPool;

const LEGACY_ORDERS_JSON: &str = include_str!("../seeds/legacy_orders.json");

/// One year's worth of legacy orders.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedYear {
    pub year: String,
    pub orders: Vec<SeedOrder>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedOrder {
    pub title: String,
    pub category: OrderCategory,
    pub date: Option<String>,
    pub link: Option<String>,
}

/// Outcome of a seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Parse the bundled legacy registry.
pub fn legacy_orders() -> Result<Vec<SeedYear>, serde_json::Error> {
    serde_json::from_str(LEGACY_ORDERS_JSON)
}

/// Insert the given years, skipping rows that already exist.
pub async fn seed_orders(pool: &PgPool, years: &[SeedYear]) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    for seed_year in years {
        tracing::info!(year = %seed_year.year, count = seed_year.orders.len(), "Seeding year");

        for (position, order) in seed_year.orders.iter().enumerate() {
            let inserted: Option<i64> = sqlx::query_scalar(
                "INSERT INTO orders (year, title, category, date, link, display_order)
                 SELECT $1, $2, $3, $4, $5, $6
                 WHERE NOT EXISTS (
                     SELECT 1 FROM orders
                     WHERE year = $1 AND title = $2 AND link IS NOT DISTINCT FROM $5
                 )
                 RETURNING id",
            )
            .bind(&seed_year.year)
            .bind(&order.title)
            .bind(order.category.as_str())
            .bind(&order.date)
            .bind(&order.link)
            .bind(position as i32 + 1)
            .fetch_optional(pool)
            .await?;

            if inserted.is_some() {
                report.inserted += 1;
            } else {
                tracing::debug!(year = %seed_year.year, title = %order.title, "Skipped existing order");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Row counts per year, newest first.
pub async fn count_by_year(pool: &PgPool) -> Result<Vec<(String, i64)>, sqlx::Error> {
    sqlx::query_as("SELECT year, COUNT(*) FROM orders GROUP BY year ORDER BY year DESC")
        .fetch_all(pool)
        .await
}
