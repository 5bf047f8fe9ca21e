use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `OK` when the database answers, `DEGRADED` otherwise.
    pub status: &'static str,
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /api/health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = pmdweb_db::health_check(&state.pool).await.is_ok();

    let (status, message) = if db_healthy {
        ("OK", "API is running")
    } else {
        ("DEGRADED", "API is running but the database is unreachable")
    };

    Json(HealthResponse {
        status,
        message,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET / -- a short index of the API surface.
async fn index() -> Json<Value> {
    Json(json!({
        "message": "PMD Web API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "auth": "/api/auth",
            "orders": "/api/orders",
            "articles": "/api/articles",
            "journals": "/api/journals",
            "cards": "/api/cards",
            "uploads": "/uploads",
        },
    }))
}

/// Health route, merged into the `/api` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Index route, mounted at the application root.
pub fn index_router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
