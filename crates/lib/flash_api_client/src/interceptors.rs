// @zen-component: CLIENT-InterceptorPipeline
//
//! Request/response interceptors.
//!
//! Every request dispatched by the [`RequestClient`](crate::RequestClient)
//! passes through an ordered pipeline. `on_request` hooks run in order just
//! before the request leaves; `on_response` hooks run in reverse order
//! (onion model) as soon as the response status is known. Two built-ins
//! carry the session protocol:
//!
//! - [`BearerAuth`]: injects the cached credential as a bearer header
//! - [`RejectionGuard`]: on 401, drops the cached credential and notifies
//!   the [`SessionBridge`]

use std::sync::Arc;

use flash_core::session::{CredentialCache, SessionBridge};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Request, Response, StatusCode};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Request/response hook run by [`InterceptorPipeline`].
pub trait Interceptor: Send + Sync {
    /// Called before dispatch. Return Err to abort the request.
    fn on_request(&self, _request: &mut Request) -> ApiResult<()> {
        Ok(())
    }

    /// Called with every response, successful or not.
    fn on_response(&self, _response: &Response) {}

    /// Interceptor identifier for debugging/logging.
    fn name(&self) -> &str;
}

/// Ordered pipeline of interceptors.
#[derive(Clone, Default)]
pub struct InterceptorPipeline {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorPipeline {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self { interceptors }
    }

    /// Create an empty pipeline (no-op).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in session interceptors over the given cache and bridge.
    ///
    /// Pipeline order: BearerAuth → RejectionGuard
    pub fn session(cache: Arc<CredentialCache>, bridge: Arc<SessionBridge>) -> Self {
        Self::new(vec![
            Arc::new(BearerAuth::new(cache.clone())),
            Arc::new(RejectionGuard::new(cache, bridge)),
        ])
    }

    pub fn push(&mut self, interceptor: Arc<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run all request hooks in order. Short-circuits on error.
    pub fn run_request(&self, request: &mut Request) -> ApiResult<()> {
        for interceptor in &self.interceptors {
            interceptor.on_request(request)?;
        }
        Ok(())
    }

    /// Run all response hooks in reverse order.
    pub fn run_response(&self, response: &Response) {
        for interceptor in self.interceptors.iter().rev() {
            interceptor.on_response(response);
        }
    }
}

/// Attaches `Authorization: Bearer <token>` when a credential is cached.
///
/// The cache is read per request, so a login or logout takes effect on the
/// very next dispatch.
pub struct BearerAuth {
    cache: Arc<CredentialCache>,
}

impl BearerAuth {
    pub fn new(cache: Arc<CredentialCache>) -> Self {
        Self { cache }
    }
}

impl Interceptor for BearerAuth {
    fn on_request(&self, request: &mut Request) -> ApiResult<()> {
        let Some(token) = self.cache.current() else {
            return Ok(());
        };
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ApiError::Validation("cached credential is not a valid header value".into())
        })?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }

    fn name(&self) -> &str {
        "BearerAuth"
    }
}

/// Ends the session when the service rejects a credential.
///
/// On a 401 the cached credential is dropped first, so no later request can
/// carry it, then the bridge is notified so the credential store clears its
/// state and publishes the session-invalidated view.
pub struct RejectionGuard {
    cache: Arc<CredentialCache>,
    bridge: Arc<SessionBridge>,
}

impl RejectionGuard {
    pub fn new(cache: Arc<CredentialCache>, bridge: Arc<SessionBridge>) -> Self {
        Self { cache, bridge }
    }
}

impl Interceptor for RejectionGuard {
    fn on_response(&self, response: &Response) {
        if response.status() != StatusCode::UNAUTHORIZED {
            return;
        }
        let had_credential = self.cache.take().is_some();
        warn!(
            url = %response.url(),
            had_credential,
            "credential rejected by service"
        );
        if !self.bridge.notify_invalidated() {
            debug!("no session handler registered; rejection not propagated");
        }
    }

    fn name(&self) -> &str {
        "RejectionGuard"
    }
}
