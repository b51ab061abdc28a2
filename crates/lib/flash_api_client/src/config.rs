//! Client configuration.

/// Base address used when `FLASH_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Configuration for the request client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Notes service base address (e.g. "http://localhost:8001").
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable        | Default                 |
    /// |-----------------|-------------------------|
    /// | `FLASH_API_URL` | `http://localhost:8001` |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FLASH_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
