//! Client error types.

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Convenience alias for client return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the request client and the gateways built on it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered 401. Session state has already been cleared.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Request failed ({status}): {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Rejected locally, before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Service issued a credential that could not be decoded")]
    MalformedCredential,
}

impl ApiError {
    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Build an error from a non-success response, extracting the
    /// service's `detail` message when the body carries one.
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        });
        if status == StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized(detail)
        } else {
            ApiError::Status { status, detail }
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Pull a human-readable message out of an error body.
///
/// The service reports `{"detail": "..."}`; request validation failures
/// carry a structured `detail` which is passed through as JSON.
fn extract_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return match parsed.detail {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        };
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
