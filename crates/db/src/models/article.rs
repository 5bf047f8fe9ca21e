//! Article entity model and DTO.

use pmdweb_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::none_if_blank;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub text: Option<String>,
    pub hyperlink: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or replacing an article.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ArticleInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub text: Option<String>,
    pub hyperlink: Option<String>,
}

impl ArticleInput {
    /// Store blank optional fields as NULL.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title,
            text: none_if_blank(self.text),
            hyperlink: none_if_blank(self.hyperlink),
        }
    }
}
