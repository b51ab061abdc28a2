//! Persisted credential state.
//!
//! Nothing persisted is ever authoritative: a session never resumes across
//! process restarts, so the only operation is `purge`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use super::StorageError;

/// Location where a prior process may have left a credential behind.
pub trait CredentialStorage: Send + Sync {
    /// Remove any persisted credential. Succeeds when nothing is stored.
    fn purge(&self) -> Result<(), StorageError>;
}

/// Credential persisted as a file on disk.
#[derive(Debug, Clone)]
pub struct FileCredentialStorage {
    path: PathBuf,
}

impl FileCredentialStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage under the platform data directory (`<data_dir>/flash/token`).
    pub fn in_data_dir() -> Self {
        Self::new(default_token_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStorage for FileCredentialStorage {
    fn purge(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "purged persisted credential");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Purge {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// Storage for hosts that never persist anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCredentialStorage;

impl CredentialStorage for NoopCredentialStorage {
    fn purge(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Path to the persisted credential file.
fn default_token_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flash")
        .join("token")
}
