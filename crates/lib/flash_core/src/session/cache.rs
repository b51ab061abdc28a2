//! The credential copy read by the request client on every dispatch.

use parking_lot::RwLock;

/// Last-write-wins holder for the current bearer token.
///
/// Written by the credential store on login/logout and cleared by the
/// request client the moment it sees a rejection.
#[derive(Default)]
pub struct CredentialCache {
    token: RwLock<Option<String>>,
}

impl CredentialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached token (`None` clears it).
    pub fn set(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    /// Clear the cached token, returning what was held.
    pub fn take(&self) -> Option<String> {
        self.token.write().take()
    }

    /// Snapshot of the token at this instant.
    pub fn current(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_set(&self) -> bool {
        self.token.read().is_some()
    }
}

impl std::fmt::Debug for CredentialCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialCache")
            .field("is_set", &self.is_set())
            .finish()
    }
}
