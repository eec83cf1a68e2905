//! Access / refresh token payloads
//!
//! Tokens are issued and verified by the backend. The client only reads the
//! unverified payload to know the role and when to refresh.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Id, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token is not a three-part JWT")]
    Malformed,

    #[error("Token payload is not valid base64: {0}")]
    Encoding(String),

    #[error("Token payload is not valid JSON: {0}")]
    Payload(String),
}

/// Kind of token carried in the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    AccessToken,
    RefreshToken,
}

/// Decoded token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub user_id: Id,
    pub role: Role,
    pub token_type: TokenType,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
}

impl TokenPayload {
    /// Decode the payload segment without verifying the signature
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let mut parts = token.split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(TokenError::Malformed),
        };
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| TokenError::Encoding(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Total validity window in seconds
    pub fn lifetime(&self) -> i64 {
        self.exp - self.iat
    }

    pub fn remaining_at(&self, now: i64) -> i64 {
        self.exp - now
    }
}

/// Outcome of the refresh check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// Access token still comfortably valid
    Fresh,
    /// Less than a third of the access token lifetime remains
    Refresh,
    /// Refresh token expired; the session is over
    Expired,
}

/// Decide whether the token pair needs a refresh at `now` (Unix seconds)
///
/// A pair whose refresh token is expired is over. Otherwise the access token
/// is renewed once less than a third of its lifetime remains.
pub fn refresh_decision(
    access: &TokenPayload,
    refresh: &TokenPayload,
    now: i64,
) -> RefreshDecision {
    if refresh.is_expired_at(now) {
        return RefreshDecision::Expired;
    }
    if access.remaining_at(now) < access.lifetime() / 3 {
        return RefreshDecision::Refresh;
    }
    RefreshDecision::Fresh
}

/// Build an unsigned token around `payload` (used by tests and mocks)
pub fn encode_unsigned(payload: &TokenPayload) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap_or_default());
    format!("{}.{}.signature", header, body)
}
