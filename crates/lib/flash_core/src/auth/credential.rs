//! Bearer credential parsing and lazy claims decoding.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use super::CredentialError;
use crate::models::auth::{Identity, TokenClaims};

/// Base64url decoder that tolerates both padded and unpadded payloads.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// An opaque bearer token issued by the notes service.
///
/// Construction only checks the three-segment shape; the claims in the
/// middle segment are decoded on demand by [`Credential::claims`]. The
/// signature is never verified client-side.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    raw: String,
}

impl Credential {
    /// Parse a raw token, rejecting anything that is not `header.payload.signature`
    /// made of visible ASCII.
    pub fn parse(raw: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = raw.into();
        let raw = raw.trim().to_string();
        if raw.is_empty() {
            return Err(CredentialError::Empty);
        }
        let segments = raw.split('.').collect::<Vec<_>>();
        if segments.len() != 3 {
            return Err(CredentialError::Segments(segments.len()));
        }
        let filled = segments.iter().filter(|s| !s.is_empty()).count();
        if filled != 3 {
            return Err(CredentialError::Segments(filled));
        }
        // Must be sendable as an `Authorization` header value.
        if !raw.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(CredentialError::Characters);
        }
        Ok(Self { raw })
    }

    /// The raw token, as sent in the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Decode the claims carried in the payload segment.
    pub fn claims(&self) -> Result<TokenClaims, CredentialError> {
        let payload = self
            .raw
            .split('.')
            .nth(1)
            .ok_or(CredentialError::Segments(1))?;
        // Accept the standard alphabet as well.
        let normalized = payload.replace('+', "-").replace('/', "_");
        let bytes = PAYLOAD_ENGINE.decode(normalized.as_bytes())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Decode the claims and project them into an [`Identity`].
    pub fn identity(&self) -> Result<Identity, CredentialError> {
        self.claims().map(Identity::from)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("raw", &"<redacted>")
            .finish()
    }
}
