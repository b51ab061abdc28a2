//! Authentication domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claims carried in the payload segment of an access token.
///
/// Any JSON payload decodes; claims that are absent or of an unexpected
/// type are left empty rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct TokenClaims {
    /// Subject: the username (standard JWT `sub` claim).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiry (unix timestamp). Informational only; never refreshed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl From<Value> for TokenClaims {
    fn from(payload: Value) -> Self {
        let sub = match payload.get("sub") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        };
        let exp = payload
            .get("exp")
            .and_then(|e| e.as_i64().or_else(|| e.as_f64().map(|f| f as i64)));
        Self { sub, exp }
    }
}

/// User-facing view of an authenticated session, projected from claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Empty when the token carries no subject.
    pub username: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            username: claims.sub.unwrap_or_default(),
        }
    }
}
