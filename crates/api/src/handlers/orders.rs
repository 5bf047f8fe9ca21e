//! Handlers for the `/orders` resource.
//!
//! Orders are created and updated from multipart forms that may carry one
//! document in a `file` field. Uploaded files are validated before anything
//! touches the disk, staged while the row is written, and rolled back if the
//! write fails. A replaced or deleted order's old file is removed afterwards.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use indexmap::IndexMap;
use pmdweb_core::error::CoreError;
use pmdweb_core::order::{
    parse_display_order, validate_new_order, Destination, OrderCategory, DEFAULT_DISPLAY_ORDER,
};
use pmdweb_core::pagination::{Page, PageRequest, Pagination};
use pmdweb_core::types::DbId;
use pmdweb_core::upload::{validate_document, ORDERS_DIR};
use pmdweb_db::models::order::{CreateOrder, Order, UpdateOrder};
use pmdweb_db::repositories::OrderRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::query::OrderListParams;
use crate::state::AppState;
use crate::uploads::StagedUpload;

// ---------------------------------------------------------------------------
// Multipart form
// ---------------------------------------------------------------------------

/// A file part received in the `file` field.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// The raw order form. Every field is optional; absent means "not supplied".
#[derive(Debug, Default)]
pub struct OrderForm {
    pub year: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
    pub display_order: Option<String>,
    pub file: Option<UploadedFile>,
}

impl OrderForm {
    /// Drain a multipart body into an [`OrderForm`]. Unknown fields are ignored.
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = OrderForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == "file" {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // Browsers send an empty, unnamed part when no file was chosen.
                if !(file_name.is_empty() && data.is_empty()) {
                    form.file = Some(UploadedFile {
                        file_name,
                        data: data.to_vec(),
                    });
                }
                continue;
            }

            let slot = match name.as_str() {
                "year" => &mut form.year,
                "title" => &mut form.title,
                "category" => &mut form.category,
                "date" => &mut form.date,
                "link" => &mut form.link,
                "display_order" => &mut form.display_order,
                _ => continue,
            };
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            *slot = Some(text);
        }

        Ok(form)
    }

    /// Validate the attached file (if any) and return its extension.
    fn file_extension(&self, max_bytes: usize) -> AppResult<Option<String>> {
        self.file
            .as_ref()
            .map(|f| validate_document(&f.file_name, f.data.len(), max_bytes))
            .transpose()
            .map_err(AppError::from)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Order", id })
}

/// Write the validated file (if any) to the orders directory.
async fn stage_file(
    state: &AppState,
    form: &OrderForm,
    ext: Option<String>,
) -> AppResult<Option<StagedUpload>> {
    match (&form.file, ext) {
        (Some(file), Some(ext)) => {
            let staged = state
                .uploads
                .stage(ORDERS_DIR, &ext, &file.data)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;
            Ok(Some(staged))
        }
        _ => Ok(None),
    }
}

async fn rollback(staged: Option<StagedUpload>) {
    if let Some(staged) = staged {
        staged.rollback().await;
    }
}

// ---------------------------------------------------------------------------
// Read handlers
// ---------------------------------------------------------------------------

/// GET /api/orders?year=&page=&limit=
///
/// One page of orders in display sequence plus pagination metadata.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> AppResult<Json<Page<Order>>> {
    let request = PageRequest::new(params.page, params.limit);
    let (data, total) = OrderRepo::list_page(&state.pool, params.year_filter(), request).await?;

    Ok(Json(Page {
        data,
        pagination: Pagination::new(request, total),
    }))
}

/// GET /api/orders/years
pub async fn list_years(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let years = OrderRepo::list_years(&state.pool).await?;
    Ok(Json(years))
}

/// GET /api/orders/by-year
///
/// All orders bucketed by year. Buckets keep the newest-first year order of
/// the underlying query, and rows keep their display sequence.
pub async fn list_by_year(
    State(state): State<AppState>,
) -> AppResult<Json<IndexMap<String, Vec<Order>>>> {
    let orders = OrderRepo::list_all(&state.pool).await?;
    Ok(Json(group_by_year(orders)))
}

/// Bucket already-sorted orders by year, preserving order.
pub fn group_by_year(orders: Vec<Order>) -> IndexMap<String, Vec<Order>> {
    let mut grouped: IndexMap<String, Vec<Order>> = IndexMap::new();
    for order in orders {
        grouped.entry(order.year.clone()).or_default().push(order);
    }
    grouped
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Order>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(order))
}

// ---------------------------------------------------------------------------
// Write handlers
// ---------------------------------------------------------------------------

/// POST /api/orders
///
/// Requires `year`, `title`, and a recognized `category`. An uploaded file
/// becomes the order's destination; otherwise `link` (or nothing) does.
pub async fn create(
    State(state): State<AppState>,
    admin: AdminUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Order>)> {
    let form = OrderForm::read(multipart).await?;

    let category =
        validate_new_order(form.year.as_deref(), form.title.as_deref(), form.category.as_deref())?;
    let display_order = match form.display_order.as_deref() {
        Some(raw) => parse_display_order(raw)?.unwrap_or(DEFAULT_DISPLAY_ORDER),
        None => DEFAULT_DISPLAY_ORDER,
    };
    let ext = form.file_extension(state.config.max_upload_bytes)?;

    let staged = stage_file(&state, &form, ext).await?;
    let destination = match &staged {
        Some(s) => Destination::File(s.public_path().to_string()),
        None => Destination::from_link(form.link.clone()),
    };

    let input = CreateOrder {
        year: form.year.unwrap_or_default().trim().to_string(),
        title: form.title.unwrap_or_default().trim().to_string(),
        category,
        date: non_blank(form.date),
        destination,
        display_order,
    };

    match OrderRepo::create(&state.pool, &input).await {
        Ok(order) => {
            if let Some(staged) = staged {
                staged.commit();
            }
            tracing::info!(
                order_id = order.id,
                year = %order.year,
                has_file = order.file_path.is_some(),
                username = %admin.claims.username,
                "Order created"
            );
            Ok((StatusCode::CREATED, Json(order)))
        }
        Err(e) => {
            rollback(staged).await;
            Err(e.into())
        }
    }
}

/// PUT /api/orders/{id}
///
/// Partial update: only supplied fields change. A new file replaces the
/// destination and the previous file is deleted once the row is updated; a
/// `link` without a file replaces the destination and clears `file_path`.
/// A previous file is kept while the new `link` still points at it.
pub async fn update(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Order>> {
    let form = OrderForm::read(multipart).await?;

    let category = non_blank(form.category.clone())
        .map(|c| c.parse::<OrderCategory>())
        .transpose()?;
    let display_order = match form.display_order.as_deref() {
        Some(raw) => parse_display_order(raw)?,
        None => None,
    };
    let ext = form.file_extension(state.config.max_upload_bytes)?;

    let mut input = UpdateOrder {
        year: non_blank(form.year.clone()),
        title: non_blank(form.title.clone()),
        category,
        date: form.date.clone(),
        destination: form
            .link
            .clone()
            .map(|link| Destination::from_link(Some(link))),
        display_order,
    };

    if input.is_empty() && form.file.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "No fields to update".into(),
        )));
    }

    let existing = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let staged = stage_file(&state, &form, ext).await?;
    if let Some(staged) = &staged {
        input.destination = Some(Destination::File(staged.public_path().to_string()));
    }

    let order = match OrderRepo::update(&state.pool, id, &input).await {
        Ok(Some(order)) => order,
        Ok(None) => {
            rollback(staged).await;
            return Err(not_found(id));
        }
        Err(e) => {
            rollback(staged).await;
            return Err(e.into());
        }
    };
    if let Some(staged) = staged {
        staged.commit();
    }

    // Remove the old document only once neither column points at it.
    if let Some(old) = existing.file_path.as_deref() {
        if !order.destination().references(old) {
            state.uploads.remove_logged(old).await;
        }
    }

    tracing::info!(
        order_id = order.id,
        username = %admin.claims.username,
        "Order updated"
    );
    Ok(Json(order))
}

/// Response for `DELETE /api/orders/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedOrder {
    pub message: &'static str,
    pub order: Order,
}

/// DELETE /api/orders/{id}
///
/// Removes the row, then its stored file (best effort).
pub async fn delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedOrder>> {
    let order = OrderRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(path) = order.file_path.as_deref() {
        state.uploads.remove_logged(path).await;
    }

    tracing::info!(order_id = id, username = %admin.claims.username, "Order deleted");
    Ok(Json(DeletedOrder {
        message: "Order deleted successfully",
        order,
    }))
}
