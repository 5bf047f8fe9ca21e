//! Domain rules shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the order
//! category and destination types, pagination arithmetic, and the upload
//! policy for order documents.

pub mod error;
pub mod order;
pub mod pagination;
pub mod types;
pub mod upload;
