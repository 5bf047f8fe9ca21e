//! Route definitions for the `/orders` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Room for the text fields and multipart framing around one document.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /           -> list (?year, page, limit)
/// POST   /           -> create (multipart, admin)
/// GET    /years      -> list_years
/// GET    /by-year    -> list_by_year
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update (multipart, admin)
/// DELETE /{id}       -> delete (admin)
/// ```
///
/// The request body limit is raised so a document of `max_upload_bytes`
/// fits; the per-file size check in the handler enforces the exact cap.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route("/years", get(orders::list_years))
        .route("/by-year", get(orders::list_by_year))
        .route(
            "/{id}",
            get(orders::get_by_id)
                .put(orders::update)
                .delete(orders::delete),
        )
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES),
        ))
}
