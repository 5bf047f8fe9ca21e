//! Order registry rules: categories, destinations, and field validation.
//!
//! An order carries exactly one of two categories and points at most at one
//! destination. The destination is modelled as [`Destination`] and only turned
//! into the `link` / `file_path` column pair at the persistence boundary via
//! [`Destination::into_columns`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Category value for directives ("คำสั่ง").
pub const CATEGORY_DIRECTIVE: &str = "คำสั่ง";

/// Category value for announcements ("ประกาศ").
pub const CATEGORY_ANNOUNCEMENT: &str = "ประกาศ";

/// Default `display_order` when none is supplied on create.
pub const DEFAULT_DISPLAY_ORDER: i32 = 0;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The two recognized order categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCategory {
    #[serde(rename = "คำสั่ง")]
    Directive,
    #[serde(rename = "ประกาศ")]
    Announcement,
}

impl OrderCategory {
    /// The value stored in the `orders.category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderCategory::Directive => CATEGORY_DIRECTIVE,
            OrderCategory::Announcement => CATEGORY_ANNOUNCEMENT,
        }
    }
}

impl fmt::Display for OrderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            CATEGORY_DIRECTIVE => Ok(OrderCategory::Directive),
            CATEGORY_ANNOUNCEMENT => Ok(OrderCategory::Announcement),
            _ => Err(CoreError::Validation(format!(
                "Category must be either \"{CATEGORY_DIRECTIVE}\" or \"{CATEGORY_ANNOUNCEMENT}\""
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// Where an order points a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// An uploaded document, identified by its public path (`/uploads/orders/...`).
    File(String),
    /// An external URL or an in-page anchor.
    ExternalLink(String),
    /// Nothing to open.
    None,
}

/// The `link` / `file_path` column pair a [`Destination`] persists as.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationColumns {
    pub link: Option<String>,
    pub file_path: Option<String>,
}

impl Destination {
    /// Build a destination from a submitted link. Blank links mean no destination.
    pub fn from_link(link: Option<String>) -> Self {
        match link {
            Some(l) if !l.trim().is_empty() => Destination::ExternalLink(l.trim().to_string()),
            _ => Destination::None,
        }
    }

    /// Resolve the destination into stored columns.
    ///
    /// A file is mirrored into `link` so readers only ever need one field.
    pub fn into_columns(self) -> DestinationColumns {
        match self {
            Destination::File(path) => DestinationColumns {
                link: Some(path.clone()),
                file_path: Some(path),
            },
            Destination::ExternalLink(url) => DestinationColumns {
                link: Some(url),
                file_path: None,
            },
            Destination::None => DestinationColumns::default(),
        }
    }

    /// Rebuild a destination from stored columns. `file_path` wins over `link`.
    pub fn from_columns(link: Option<&str>, file_path: Option<&str>) -> Self {
        match (file_path, link) {
            (Some(path), _) => Destination::File(path.to_string()),
            (None, Some(url)) if !url.is_empty() => Destination::ExternalLink(url.to_string()),
            _ => Destination::None,
        }
    }

    /// The stored file path, if this destination is a file.
    pub fn file_path(&self) -> Option<&str> {
        match self {
            Destination::File(path) => Some(path),
            _ => None,
        }
    }

    /// True when this destination still points at `path`, as a file or a link.
    pub fn references(&self, path: &str) -> bool {
        match self {
            Destination::File(p) | Destination::ExternalLink(p) => p == path,
            Destination::None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Ensure the fields required on create are present and parse the category.
pub fn validate_new_order(
    year: Option<&str>,
    title: Option<&str>,
    category: Option<&str>,
) -> Result<OrderCategory, CoreError> {
    if is_blank(year) || is_blank(title) || is_blank(category) {
        return Err(CoreError::Validation(
            "Year, title, and category are required".into(),
        ));
    }
    category.unwrap_or_default().parse()
}

/// Parse a submitted `display_order`. Blank input means "not supplied".
pub fn parse_display_order(raw: &str) -> Result<Option<i32>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("display_order must be an integer, got '{trimmed}'")))
}
