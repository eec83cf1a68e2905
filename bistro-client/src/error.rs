//! Client error types

use shared::error::AppError;
use shared::response::FieldError;
use shared::token::TokenError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or token rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Form validation failed (HTTP 422)
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// No active session for an authenticated call
    #[error("No active session")]
    NoSession,

    /// Token payload could not be read
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Realtime channel already closed
    #[error("Event channel closed")]
    ChannelClosed,

    /// Session storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected locally before reaching the backend
    #[error("{0}")]
    App(#[from] AppError),
}

impl ClientError {
    /// Field-level errors to bind onto a form, empty if none
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { fields, .. } => fields,
            _ => &[],
        }
    }

    /// Message suitable for a user-facing notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Api { message, .. } => message.clone(),
            Self::App(err) => err.message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::NoSession)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
