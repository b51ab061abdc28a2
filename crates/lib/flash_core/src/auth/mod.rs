//! Credential decoding and persisted credential state.
//!
//! Provides bearer-token parsing and claims decoding shared by the
//! credential store and the wasm bindings.

pub mod credential;
pub mod storage;

use std::path::PathBuf;

use thiserror::Error;

pub use credential::Credential;
pub use storage::{CredentialStorage, FileCredentialStorage, NoopCredentialStorage};

/// Credential decoding errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Credential is empty")]
    Empty,

    #[error("Malformed credential: expected 3 non-empty segments, found {0}")]
    Segments(usize),

    #[error("Malformed credential: contains characters not allowed in a header")]
    Characters,

    #[error("Credential payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Credential claims are invalid: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Persisted credential state errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to purge credential at {path}: {source}")]
    Purge {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
