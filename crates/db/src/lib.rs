//! Persistence layer: connection pool, migrations, models, and repositories.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Database connection settings.
///
/// Either a full connection string or the individual `DB_*` variables.
#[derive(Debug, Clone)]
pub enum DbConfig {
    Url(String),
    Parts {
        host: String,
        port: u16,
        database: String,
        user: String,
        password: Option<String>,
    },
}

impl DbConfig {
    /// Load connection settings from environment variables.
    ///
    /// `DATABASE_URL` wins when set. Otherwise:
    ///
    /// | Env Var       | Default     |
    /// |---------------|-------------|
    /// | `DB_HOST`     | `localhost` |
    /// | `DB_PORT`     | `5432`      |
    /// | `DB_NAME`     | `pmdweb_db` |
    /// | `DB_USER`     | `postgres`  |
    /// | `DB_PASSWORD` | (none)      |
    pub fn from_env() -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                return DbConfig::Url(url);
            }
        }

        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        DbConfig::Parts {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port,
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "pmdweb_db".into()),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into()),
            password: std::env::var("DB_PASSWORD").ok(),
        }
    }

    /// Build sqlx connect options.
    ///
    /// Remote connection strings without an explicit `sslmode` require TLS.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match self {
            DbConfig::Url(url) => {
                let options = PgConnectOptions::from_str(url)?;
                if is_local_url(url) || url.contains("sslmode=") {
                    Ok(options)
                } else {
                    Ok(options.ssl_mode(PgSslMode::Require))
                }
            }
            DbConfig::Parts {
                host,
                port,
                database,
                user,
                password,
            } => {
                let mut options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .database(database)
                    .username(user);
                if let Some(password) = password {
                    options = options.password(password);
                }
                Ok(options)
            }
        }
    }
}

fn is_local_url(url: &str) -> bool {
    url.contains("localhost") || url.contains("127.0.0.1")
}

/// Create a connection pool from connection settings.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(config.connect_options()?)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_url_keeps_default_ssl() {
        let config = DbConfig::Url("postgres://u:p@localhost:5432/pmdweb_db".into());
        assert!(config.connect_options().is_ok());
        assert!(is_local_url("postgres://u:p@localhost:5432/pmdweb_db"));
    }

    #[test]
    fn remote_url_is_not_local() {
        assert!(!is_local_url("postgres://u:p@db.example.com:5432/pmdweb_db"));
        let config = DbConfig::Url("postgres://u:p@db.example.com:5432/pmdweb_db".into());
        assert!(config.connect_options().is_ok());
    }

    #[test]
    fn parts_build_options() {
        let config = DbConfig::Parts {
            host: "localhost".into(),
            port: 5433,
            database: "pmdweb_db".into(),
            user: "postgres".into(),
            password: None,
        };
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("pmdweb_db"));
    }

    #[test]
    fn malformed_url_is_an_error() {
        let config = DbConfig::Url("not a url".into());
        assert!(config.connect_options().is_err());
    }
}
