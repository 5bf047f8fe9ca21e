pub mod articles;
pub mod auth;
pub mod cards;
pub mod health;
pub mod journals;
pub mod orders;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Reads are public; every create/update/delete requires an admin bearer token.
///
/// ```text
/// /auth/login                   login (public)
/// /auth/verify                  verify bearer token
///
/// /orders                       list (?year, page, limit), create (multipart)
/// /orders/years                 distinct years, newest first
/// /orders/by-year               all orders grouped by year
/// /orders/{id}                  get, update (multipart), delete
///
/// /articles                     list, create
/// /articles/{id}                get, update, delete
///
/// /journals                     list, create
/// /journals/{id}                get, update, delete
///
/// /cards                        list, create
/// /cards/{id}                   get, update, delete
///
/// /health                       service and database health
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/orders", orders::router(config.max_upload_bytes))
        .nest("/articles", articles::router())
        .nest("/journals", journals::router())
        .nest("/cards", cards::router())
        .merge(health::router())
}
