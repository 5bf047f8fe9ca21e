//! Route definitions for the `/journals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::journals;
use crate::state::AppState;

/// Routes mounted at `/journals`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(journals::list).post(journals::create))
        .route(
            "/{id}",
            get(journals::get_by_id)
                .put(journals::update)
                .delete(journals::delete),
        )
}
