//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Signed, time-limited bearer token generation and validation.
//! - [`credentials`] -- The single admin credential, provisioned at start-up.

pub mod credentials;
pub mod jwt;
pub mod password;
