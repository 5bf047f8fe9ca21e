use std::sync::Arc;

use crate::auth::credentials::AdminCredentials;
use crate::config::ServerConfig;
use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything in it is read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pmdweb_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The provisioned admin credential, checked on login.
    pub credentials: Arc<AdminCredentials>,
    /// Disk storage for uploaded order documents.
    pub uploads: UploadStore,
}
