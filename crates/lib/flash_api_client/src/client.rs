// @zen-component: CLIENT-RequestClient
//
//! Configured HTTP client with credential injection and rejection detection.

use std::sync::Arc;

use flash_core::session::{CredentialCache, SessionBridge};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::interceptors::{Interceptor, InterceptorPipeline};

/// HTTP client for the notes service.
///
/// Holds no reference to the credential store: only the shared
/// [`CredentialCache`] it reads on every dispatch and, through its
/// [`RejectionGuard`](crate::interceptors::RejectionGuard), the
/// [`SessionBridge`] it notifies on rejection. Cheap to clone.
#[derive(Clone)]
pub struct RequestClient {
    http: reqwest::Client,
    base_url: String,
    pipeline: Arc<InterceptorPipeline>,
    cache: Arc<CredentialCache>,
}

impl RequestClient {
    /// Build a client with the built-in session interceptors.
    pub fn new(
        config: &ClientConfig,
        cache: Arc<CredentialCache>,
        bridge: Arc<SessionBridge>,
    ) -> ApiResult<Self> {
        Self::with_interceptors(config, cache, bridge, Vec::new())
    }

    /// Build a client whose pipeline runs `extra` after the built-ins.
    pub fn with_interceptors(
        config: &ClientConfig,
        cache: Arc<CredentialCache>,
        bridge: Arc<SessionBridge>,
        extra: Vec<Arc<dyn Interceptor>>,
    ) -> ApiResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let mut pipeline = InterceptorPipeline::session(cache.clone(), bridge);
        for interceptor in extra {
            pipeline.push(interceptor);
        }
        let http = reqwest::Client::builder().build()?;
        debug!(%base_url, interceptors = pipeline.len(), "request client configured");
        Ok(Self {
            http,
            base_url,
            pipeline: Arc::new(pipeline),
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credential(&self) -> bool {
        self.cache.is_set()
    }

    /// Resolve a service path (e.g. `/notes`) against the base address.
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| ApiError::Config(format!("invalid url {joined}: {e}")))
    }

    /// Start a request. Interceptors run when it is passed to [`send`](Self::send).
    pub fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        Ok(self.http.request(method, self.url(path)?))
    }

    /// Dispatch a request through the interceptor pipeline.
    ///
    /// Non-success statuses become errors after the response hooks have run,
    /// so a 401 has already cleared the session by the time the caller sees
    /// [`ApiError::Unauthorized`].
    pub async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let mut request = builder.build()?;
        self.pipeline.run_request(&mut request)?;
        debug!(
            method = %request.method(),
            url = %request.url(),
            authenticated = request.headers().contains_key(AUTHORIZATION),
            "dispatching request"
        );

        let response = self.http.execute(request).await?;
        self.pipeline.run_response(&response);

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.request(Method::GET, path)?).await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path)?.json(body))
            .await?;
        decode(response).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, path)?.form(body))
            .await?;
        decode(response).await
    }

    /// DELETE a resource; the response body is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path)?).await?;
        Ok(())
    }
}

impl std::fmt::Debug for RequestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestClient")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.pipeline.len())
            .field("cache", &self.cache)
            .finish()
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Validate the configured base address and strip any trailing slash.
fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| ApiError::Config(format!("invalid base url {raw:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::Config(format!(
            "unsupported scheme {:?} in base url",
            parsed.scheme()
        )));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
