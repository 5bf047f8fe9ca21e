pub mod articles;
pub mod auth;
pub mod cards;
pub mod journals;
pub mod orders;

use std::collections::BTreeSet;

use pmdweb_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a request body, turning failures into a 400.
///
/// Messages are deduplicated so two fields sharing one message report it once.
pub(crate) fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input.validate().map_err(|errors| {
        let messages: BTreeSet<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        AppError::Core(CoreError::Validation(
            messages.into_iter().collect::<Vec<_>>().join("; "),
        ))
    })
}
