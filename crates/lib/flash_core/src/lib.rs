//! # flash_core
//!
//! Session and credential coordination for the Flash notes client.
//!
//! The networking layer (`flash_api_client`) is wired before any UI state
//! exists, yet has to push "credential rejected" events back into the
//! [`session::CredentialStore`]. The pieces here make that possible without a
//! dependency cycle:
//!
//! - [`session::CredentialCache`]: the credential copy the request client reads
//! - [`session::SessionBridge`]: late-bound invalidation callback slot
//! - [`session::CredentialStore`]: login/logout and the reactive session view

pub mod auth;
pub mod models;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
