//! Journal entity model and DTO.
//!
//! Journals are month-tagged news items; the home page groups them by `month`.

use pmdweb_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::none_if_blank;

/// A row from the `journals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Journal {
    pub id: DbId,
    pub month: String,
    pub title: String,
    pub text: Option<String>,
    pub hyperlink: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or replacing a journal.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JournalInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Month and title are required"))]
    pub month: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Month and title are required"))]
    pub title: String,
    pub text: Option<String>,
    pub hyperlink: Option<String>,
}

impl JournalInput {
    pub fn normalized(self) -> Self {
        Self {
            month: self.month,
            title: self.title,
            text: none_if_blank(self.text),
            hyperlink: none_if_blank(self.hyperlink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_month_fails_validation() {
        let input: JournalInput = serde_json::from_value(serde_json::json!({ "title": "News" })).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("month"));
    }

    #[test]
    fn blank_optionals_become_null() {
        let input = JournalInput {
            month: "มกราคม".into(),
            title: "News".into(),
            text: Some("   ".into()),
            hyperlink: Some(String::new()),
        }
        .normalized();
        assert!(input.validate().is_ok());
        assert_eq!(input.text, None);
        assert_eq!(input.hyperlink, None);
    }
}
