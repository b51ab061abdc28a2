// @zen-component: SESSION-Bridge
//
//! Late-bound invalidation slot between the request client and the store.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Callback run when the request client detects a rejected credential.
pub type InvalidationHandler = Arc<dyn Fn() + Send + Sync>;

/// Single-slot callback registry.
///
/// The request client holds the bridge from construction; the credential
/// store registers its handler later, during bootstrap. Notifications that
/// arrive before registration are dropped.
#[derive(Default)]
pub struct SessionBridge {
    handler: Mutex<Option<InvalidationHandler>>,
}

impl SessionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the invalidation handler, replacing any previous one.
    pub fn register_invalidation_handler<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let replaced = self.handler.lock().replace(Arc::new(handler)).is_some();
        debug!(replaced, "registered session invalidation handler");
    }

    /// Run the registered handler. Returns `false` if none is registered.
    pub fn notify_invalidated(&self) -> bool {
        // Clone out of the slot so the handler runs without the lock held.
        let handler = self.handler.lock().clone();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => {
                debug!("session invalidated before a handler was registered");
                false
            }
        }
    }

    pub fn clear_handler(&self) {
        self.handler.lock().take();
    }

    pub fn has_handler(&self) -> bool {
        self.handler.lock().is_some()
    }
}

impl std::fmt::Debug for SessionBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBridge")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
