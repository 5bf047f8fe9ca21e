//! Order entity model and DTOs.

use pmdweb_core::order::{Destination, OrderCategory};
use pmdweb_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub year: String,
    pub title: String,
    pub category: String,
    pub date: Option<String>,
    pub link: Option<String>,
    pub file_path: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// The destination this row resolves to.
    pub fn destination(&self) -> Destination {
        Destination::from_columns(self.link.as_deref(), self.file_path.as_deref())
    }
}

/// DTO for creating a new order.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub year: String,
    pub title: String,
    pub category: OrderCategory,
    pub date: Option<String>,
    pub destination: Destination,
    pub display_order: i32,
}

/// DTO for a partial order update. `None` fields are left untouched.
///
/// `destination: Some(..)` rewrites both `link` and `file_path`.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrder {
    pub year: Option<String>,
    pub title: Option<String>,
    pub category: Option<OrderCategory>,
    pub date: Option<String>,
    pub destination: Option<Destination>,
    pub display_order: Option<i32>,
}

impl UpdateOrder {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.title.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.destination.is_none()
            && self.display_order.is_none()
    }
}
