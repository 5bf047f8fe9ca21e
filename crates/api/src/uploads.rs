//! Local disk storage for uploaded order documents.
//!
//! Files are written under the configured upload root and referenced from the
//! database by their public path (`/uploads/<dir>/<name>`). A write is first
//! *staged*: the caller either commits it once the row mutation succeeded or
//! rolls it back so no unreferenced file is left behind.

use std::io;
use std::path::{Path, PathBuf};

use pmdweb_core::upload::{public_path, relative_from_public, stored_file_name, ORDERS_DIR};

/// Handle to the upload root directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

/// A file written to disk but not yet referenced by a committed row.
#[derive(Debug)]
#[must_use = "a staged upload must be committed or rolled back"]
pub struct StagedUpload {
    public_path: String,
    disk_path: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload root and its sub-directories.
    pub async fn ensure_dirs(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(self.root.join(ORDERS_DIR)).await
    }

    /// Map a stored public path onto the disk. `None` for paths outside the root.
    pub fn disk_path(&self, public: &str) -> Option<PathBuf> {
        relative_from_public(public).map(|rel| self.root.join(rel))
    }

    /// Write `data` to a freshly named file in `dir`.
    pub async fn stage(&self, dir: &str, ext: &str, data: &[u8]) -> io::Result<StagedUpload> {
        let dir_path = self.root.join(dir);
        tokio::fs::create_dir_all(&dir_path).await?;

        let file_name = stored_file_name(ext);
        let disk_path = dir_path.join(&file_name);
        tokio::fs::write(&disk_path, data).await?;

        tracing::debug!(path = %disk_path.display(), bytes = data.len(), "Staged upload");
        Ok(StagedUpload {
            public_path: public_path(dir, &file_name),
            disk_path,
        })
    }

    /// Delete the file behind a public path.
    ///
    /// Returns `Ok(false)` when the path is outside the upload root or the
    /// file is already gone.
    pub async fn remove(&self, public: &str) -> io::Result<bool> {
        let Some(path) = self.disk_path(public) else {
            return Ok(false);
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Best-effort delete; failures are logged, never returned.
    pub async fn remove_logged(&self, public: &str) {
        match self.remove(public).await {
            Ok(true) => tracing::info!(path = %public, "Removed stored file"),
            Ok(false) => tracing::debug!(path = %public, "No stored file to remove"),
            Err(e) => tracing::warn!(path = %public, error = %e, "Failed to remove stored file"),
        }
    }
}

impl StagedUpload {
    /// The path to persist in `file_path`.
    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    /// Keep the file; it is now owned by the row that references it.
    pub fn commit(self) -> String {
        self.public_path
    }

    /// Remove the staged file after the row mutation failed.
    pub async fn rollback(self) {
        if let Err(e) = tokio::fs::remove_file(&self.disk_path).await {
            tracing::warn!(
                path = %self.disk_path.display(),
                error = %e,
                "Failed to roll back staged upload"
            );
        } else {
            tracing::debug!(path = %self.disk_path.display(), "Rolled back staged upload");
        }
    }
}
