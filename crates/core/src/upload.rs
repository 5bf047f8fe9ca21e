//! Upload policy for order documents.
//!
//! Decides which files are accepted, how stored files are named, and how a
//! stored public path (`/uploads/orders/<name>`) maps back onto a path relative
//! to the upload root. The actual disk I/O lives in the API crate.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// URL prefix under which uploaded files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Sub-directory of the upload root holding order documents.
pub const ORDERS_DIR: &str = "orders";

/// Default maximum upload size (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Document extensions accepted for orders.
pub const ALLOWED_DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx"];

/// Validate an uploaded document and return its lower-cased extension.
pub fn validate_document(file_name: &str, size: usize, max_bytes: usize) -> Result<String, CoreError> {
    if size == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size > max_bytes {
        return Err(CoreError::Validation(format!(
            "File exceeds maximum size of {max_bytes} bytes"
        )));
    }

    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !ALLOWED_DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported file type '.{ext}'. Supported: .pdf, .doc, .docx, .xls, .xlsx"
        )));
    }
    Ok(ext)
}

/// Generate a collision-free stored file name with the given extension.
pub fn stored_file_name(ext: &str) -> String {
    format!(
        "{}-{}.{ext}",
        chrono::Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4().simple()
    )
}

/// Public path of a stored file, as saved in `orders.file_path`.
pub fn public_path(dir: &str, file_name: &str) -> String {
    format!("{PUBLIC_PREFIX}/{dir}/{file_name}")
}

/// Map a public path back to a path relative to the upload root.
///
/// Returns `None` for anything outside [`PUBLIC_PREFIX`] or with empty,
/// `.` or `..` segments.
pub fn relative_from_public(public: &str) -> Option<PathBuf> {
    let rest = public.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')?;
    if rest.contains('\\') {
        return None;
    }
    let mut path = PathBuf::new();
    for segment in rest.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}
