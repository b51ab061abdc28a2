//! # flash_api_client
//!
//! Credential-injecting HTTP client for the Flash notes service.
//!
//! [`FlashClient::bootstrap`] wires the pieces in the required order:
//! networking first (over a fresh credential cache and session bridge),
//! then the credential store, which is activated immediately so the
//! process starts unauthenticated.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod interceptors;
pub mod models;
pub mod notebook;
pub mod notes;

use std::sync::Arc;

use flash_core::auth::CredentialStorage;
use flash_core::session::{CredentialCache, CredentialStore, SessionBridge};

pub use auth::AuthGateway;
pub use client::RequestClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use notebook::Notebook;
pub use notes::NotesGateway;

/// A fully wired client session.
#[derive(Debug, Clone)]
pub struct FlashClient {
    pub client: RequestClient,
    pub store: CredentialStore,
    pub auth: AuthGateway,
    pub notes: NotesGateway,
}

impl FlashClient {
    /// Wire and activate a session with the built-in interceptors.
    pub fn bootstrap(
        config: &ClientConfig,
        storage: Arc<dyn CredentialStorage>,
    ) -> ApiResult<Self> {
        Self::bootstrap_with(config, storage, Vec::new())
    }

    /// Like [`bootstrap`](Self::bootstrap), appending `extra` interceptors.
    pub fn bootstrap_with(
        config: &ClientConfig,
        storage: Arc<dyn CredentialStorage>,
        extra: Vec<Arc<dyn interceptors::Interceptor>>,
    ) -> ApiResult<Self> {
        let cache = Arc::new(CredentialCache::new());
        let bridge = Arc::new(SessionBridge::new());

        let client = RequestClient::with_interceptors(config, cache.clone(), bridge.clone(), extra)?;

        let store = CredentialStore::new(cache, bridge, storage);
        store.activate();

        Ok(Self {
            auth: AuthGateway::new(client.clone()),
            notes: NotesGateway::new(client.clone()),
            client,
            store,
        })
    }

    /// A fresh, empty notebook over this session's gateway.
    pub fn notebook(&self) -> Notebook {
        Notebook::new(self.notes.clone())
    }
}
