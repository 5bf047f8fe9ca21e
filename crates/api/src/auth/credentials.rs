//! The single admin credential.
//!
//! The credential is provisioned exactly once at start-up from [`AdminConfig`]
//! and then shared read-only through `AppState`. Only the Argon2id hash of the
//! password is kept in memory.

use crate::auth::password::{hash_password, verify_password};

/// Username used when `ADMIN_USERNAME` is unset.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password used when neither `ADMIN_PASSWORD` nor `ADMIN_PASSWORD_HASH` is set.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Where the admin password comes from.
#[derive(Clone)]
pub enum AdminSecret {
    /// A plaintext password, hashed during provisioning.
    Plain(String),
    /// An existing PHC-formatted Argon2id hash.
    Hash(String),
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminSecret::Plain(_) => f.write_str("Plain(<redacted>)"),
            AdminSecret::Hash(_) => f.write_str("Hash(<redacted>)"),
        }
    }
}

/// Admin account configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub secret: AdminSecret,
}

impl AdminConfig {
    /// Load the admin account from environment variables.
    ///
    /// | Env Var               | Default    |
    /// |-----------------------|------------|
    /// | `ADMIN_USERNAME`      | `admin`    |
    /// | `ADMIN_PASSWORD_HASH` | (none)     |
    /// | `ADMIN_PASSWORD`      | `admin123` |
    ///
    /// `ADMIN_PASSWORD_HASH` takes precedence over `ADMIN_PASSWORD`.
    pub fn from_env() -> Self {
        let username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.into());

        let secret = match (
            std::env::var("ADMIN_PASSWORD_HASH"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(hash), _) if !hash.is_empty() => AdminSecret::Hash(hash),
            (_, Ok(password)) if !password.is_empty() => AdminSecret::Plain(password),
            _ => {
                tracing::warn!("ADMIN_PASSWORD not set, using the default admin password");
                AdminSecret::Plain(DEFAULT_ADMIN_PASSWORD.into())
            }
        };

        Self { username, secret }
    }
}

/// Errors raised while provisioning the admin credential.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("admin username must not be empty")]
    EmptyUsername,
    #[error("failed to hash admin password: {0}")]
    Hash(argon2::password_hash::Error),
    #[error("ADMIN_PASSWORD_HASH is not a valid PHC string: {0}")]
    InvalidHash(argon2::password_hash::Error),
}

/// The provisioned admin credential: a username and a password hash.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl AdminCredentials {
    /// Provision the credential from configuration, hashing a plaintext password.
    pub fn provision(config: &AdminConfig) -> Result<Self, ProvisionError> {
        if config.username.trim().is_empty() {
            return Err(ProvisionError::EmptyUsername);
        }

        let password_hash = match &config.secret {
            AdminSecret::Plain(password) => hash_password(password).map_err(ProvisionError::Hash)?,
            AdminSecret::Hash(hash) => {
                argon2::password_hash::PasswordHash::new(hash)
                    .map_err(ProvisionError::InvalidHash)?;
                hash.clone()
            }
        };

        Ok(Self {
            username: config.username.clone(),
            password_hash,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a username/password pair against the credential.
    pub fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, argon2::password_hash::Error> {
        if username != self.username {
            return Ok(false);
        }
        verify_password(password, &self.password_hash)
    }
}
