//! Claims sniffing - structural decoding of the persisted session token.
//!
//! The token is opaque except for its middle dot-separated segment, which
//! carries a base64 JSON claims payload. This module owns all of that
//! knowledge; nothing else in the workspace looks inside the token.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// The claims payload fields this flow cares about.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject claim identifying which user the token belongs to. Tokens
    /// issued before the auth schema change lack it.
    #[serde(default)]
    pub sub: Option<String>,
}

/// Structural decode failure; the token is not usable as a claims carrier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed session token")]
pub struct MalformedToken;

/// Decode the claims payload from a dot-separated token.
///
/// Fails with [`MalformedToken`] when the token has no middle segment, the
/// segment is not base64, or the decoded bytes are not a JSON object.
pub fn decode_claims(token: &str) -> Result<Claims, MalformedToken> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(MalformedToken),
    };

    // Tokens in the wild carry base64url payloads without padding; older
    // ones used the standard alphabet.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD.decode(payload))
        .map_err(|_| MalformedToken)?;

    serde_json::from_slice(&bytes).map_err(|_| MalformedToken)
}
