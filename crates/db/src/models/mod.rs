//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The input DTO(s) used for inserts and updates

pub mod article;
pub mod card;
pub mod journal;
pub mod order;

/// Turn blank optional text into `None` so empty form fields are stored as NULL.
pub(crate) fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
