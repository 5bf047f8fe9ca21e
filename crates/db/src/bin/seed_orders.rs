//! Load the historical order registry into the `orders` table.
//!
//! Usage: `pmdweb-seed-orders` (reads the same database variables as the API).

use anyhow::Context;
use pmdweb_db::seed;
use pmdweb_db::DbConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pmdweb_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = pmdweb_db::create_pool(&DbConfig::from_env())
        .await
        .context("Failed to connect to database")?;
    pmdweb_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let years = seed::legacy_orders().context("Bundled order registry is malformed")?;
    let report = seed::seed_orders(&pool, &years).await?;
    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Order seeding complete"
    );

    for (year, count) in seed::count_by_year(&pool).await? {
        tracing::info!(%year, count, "Orders per year");
    }

    pool.close().await;
    Ok(())
}
