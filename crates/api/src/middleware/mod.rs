//! Request extractors.
//!
//! - [`auth::AdminUser`] -- Requires a valid bearer token for the admin account.

pub mod auth;
