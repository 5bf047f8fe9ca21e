//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /orders` (`?year=&page=&limit=`).
///
/// `page` and `limit` are clamped by `PageRequest`; a blank `year` means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    pub year: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl OrderListParams {
    /// The year filter, if one was actually given.
    pub fn year_filter(&self) -> Option<&str> {
        self.year.as_deref().map(str::trim).filter(|y| !y.is_empty())
    }
}
