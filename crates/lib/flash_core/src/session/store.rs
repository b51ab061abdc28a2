// @zen-component: SESSION-CredentialStore
//
//! Credential store: the single source of truth for "is the user logged in".

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{CredentialCache, SessionBridge, SessionEnd, SessionView};
use crate::auth::{Credential, CredentialError, CredentialStorage};
use crate::models::auth::Identity;

/// A held credential together with its projected identity.
#[derive(Debug, Clone)]
struct ActiveSession {
    credential: Credential,
    identity: Identity,
}

struct StoreInner {
    session: RwLock<Option<ActiveSession>>,
    cache: Arc<CredentialCache>,
    bridge: Arc<SessionBridge>,
    storage: Arc<dyn CredentialStorage>,
    view: watch::Sender<SessionView>,
    activated: AtomicBool,
}

/// Holds the current credential and publishes it to the request client.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct CredentialStore {
    inner: Arc<StoreInner>,
}

impl CredentialStore {
    /// Build a store over the cache and bridge already handed to the
    /// request client. Call [`CredentialStore::activate`] before use.
    pub fn new(
        cache: Arc<CredentialCache>,
        bridge: Arc<SessionBridge>,
        storage: Arc<dyn CredentialStorage>,
    ) -> Self {
        let (view, _) = watch::channel(SessionView::default());
        Self {
            inner: Arc::new(StoreInner {
                session: RwLock::new(None),
                cache,
                bridge,
                storage,
                view,
                activated: AtomicBool::new(false),
            }),
        }
    }

    /// Register the invalidation handler and discard any leftover session.
    ///
    /// The first activation purges persisted state and the credential cache,
    /// so every process starts unauthenticated.
    pub fn activate(&self) {
        let weak = Arc::downgrade(&self.inner);
        self.inner.bridge.register_invalidation_handler(move || {
            if let Some(inner) = weak.upgrade() {
                CredentialStore { inner }.end(SessionEnd::Rejected);
            }
        });

        if !self.inner.activated.swap(true, Ordering::SeqCst) {
            self.inner.cache.set(None);
            self.purge_persisted();
            debug!("credential store activated");
        }
    }

    /// Adopt `raw_token` as the current credential.
    ///
    /// A token whose claims cannot be decoded is never retained: the store
    /// logs out instead and the caller observes the unauthenticated state.
    pub fn login(&self, raw_token: impl Into<String>) {
        match decode(raw_token.into()) {
            Ok(active) => {
                let identity = active.identity.clone();
                self.inner
                    .cache
                    .set(Some(active.credential.as_str().to_string()));
                *self.inner.session.write() = Some(active);
                self.inner
                    .view
                    .send_replace(SessionView::authenticated(identity.clone()));
                info!(username = %identity.username, "session started");
            }
            Err(e) => {
                warn!(error = %e, "discarding malformed credential");
                self.end(SessionEnd::MalformedCredential);
            }
        }
    }

    /// Clear the credential and identity. Idempotent.
    pub fn logout(&self) {
        self.end(SessionEnd::Logout);
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.read().is_some()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner
            .session
            .read()
            .as_ref()
            .map(|s| s.identity.clone())
    }

    /// The raw bearer token currently held.
    pub fn token(&self) -> Option<String> {
        self.inner
            .session
            .read()
            .as_ref()
            .map(|s| s.credential.as_str().to_string())
    }

    /// Snapshot of the reactive session view.
    pub fn view(&self) -> SessionView {
        self.inner.view.borrow().clone()
    }

    /// Subscribe to session view changes.
    ///
    /// Subscribers are only notified when the authenticated state or
    /// identity actually changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.inner.view.subscribe()
    }

    fn end(&self, reason: SessionEnd) {
        let previous = self.inner.session.write().take();
        self.inner.cache.set(None);
        self.purge_persisted();

        let notified = self.inner.view.send_if_modified(|view| {
            if !view.is_authenticated() {
                return false;
            }
            *view = SessionView::ended(reason);
            true
        });

        if let Some(previous) = previous {
            info!(
                username = %previous.identity.username,
                ?reason,
                notified,
                "session ended"
            );
        }
    }

    fn purge_persisted(&self) {
        if let Err(e) = self.inner.storage.purge() {
            warn!(error = %e, "failed to purge persisted credential");
        }
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("identity", &self.identity())
            .finish()
    }
}

fn decode(raw: String) -> Result<ActiveSession, CredentialError> {
    let credential = Credential::parse(raw)?;
    let identity = credential.identity()?;
    Ok(ActiveSession {
        credential,
        identity,
    })
}
