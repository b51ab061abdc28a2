// @zen-component: SESSION-Coordination
//
//! Session coordination over a shared credential cache.
//!
//! Bootstrap order matters: the networking layer receives the
//! [`CredentialCache`] and [`SessionBridge`] first, the [`CredentialStore`]
//! is built afterwards from the same two values and then activated.
//!
//! ```text
//! CredentialStore ──writes──▶ CredentialCache ◀──reads── request client
//!        ▲                                                   │
//!        └──────────── SessionBridge ◀──── 401 detected ─────┘
//! ```

pub mod bridge;
pub mod cache;
pub mod store;

use serde::Serialize;

use crate::models::auth::Identity;

pub use bridge::SessionBridge;
pub use cache::CredentialCache;
pub use store::CredentialStore;

/// Why the most recent session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEnd {
    /// Explicit `logout()`.
    Logout,
    /// The notes service answered 401 to a request.
    Rejected,
    /// A login supplied a token whose claims could not be decoded.
    MalformedCredential,
}

/// Reactive "current user" view published by the [`CredentialStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Present iff a credential is held.
    pub identity: Option<Identity>,
    /// Set when an authenticated session ended; cleared on the next login.
    pub ended_by: Option<SessionEnd>,
}

impl SessionView {
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            ended_by: None,
        }
    }

    pub fn ended(reason: SessionEnd) -> Self {
        Self {
            identity: None,
            ended_by: Some(reason),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The session was ended by the service rather than by the user.
    pub fn was_rejected(&self) -> bool {
        self.ended_by == Some(SessionEnd::Rejected)
    }
}
