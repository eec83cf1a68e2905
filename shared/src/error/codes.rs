//! Error codes and their HTTP status mapping

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    NotAuthenticated = 1001,
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    PermissionDenied = 2001,

    // ==================== 4xxx: Order ====================
    OrderNotFound = 4001,
    OrderAlreadyPaid = 4002,
    OrderRejected = 4003,

    // ==================== 5xxx: Payment ====================
    PaymentFailed = 5001,

    // ==================== 6xxx: Dish / Menu ====================
    DishNotFound = 6001,
    DishUnavailable = 6002,
    MenuNotFound = 6003,

    // ==================== 7xxx: Table ====================
    TableNotFound = 7001,
    TableTokenInvalid = 7002,
    TableHidden = 7003,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    NetworkError = 9002,
}

impl ErrorCode {
    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::PermissionDenied => "Permission denied",
            Self::OrderNotFound => "Order not found",
            Self::OrderAlreadyPaid => "Order already paid",
            Self::OrderRejected => "Order was rejected",
            Self::PaymentFailed => "Payment failed",
            Self::DishNotFound => "Dish not found",
            Self::DishUnavailable => "Dish is not available",
            Self::MenuNotFound => "Menu not found",
            Self::TableNotFound => "Table not found",
            Self::TableTokenInvalid => "Table token is invalid",
            Self::TableHidden => "Table is not open for ordering",
            Self::InternalError => "Internal server error",
            Self::NetworkError => "Network error",
        }
    }

    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound
            | Self::OrderNotFound
            | Self::DishNotFound
            | Self::MenuNotFound
            | Self::TableNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::OrderAlreadyPaid => StatusCode::CONFLICT,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::TableTokenInvalid => StatusCode::UNAUTHORIZED,

            Self::PermissionDenied | Self::TableHidden => StatusCode::FORBIDDEN,

            Self::ValidationFailed
            | Self::DishUnavailable
            | Self::OrderRejected
            | Self::PaymentFailed => StatusCode::UNPROCESSABLE_ENTITY,

            Self::InvalidRequest => StatusCode::BAD_REQUEST,

            Self::Unknown | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NetworkError => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Raised when a numeric code has no [`ErrorCode`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            2001 => Self::PermissionDenied,
            4001 => Self::OrderNotFound,
            4002 => Self::OrderAlreadyPaid,
            4003 => Self::OrderRejected,
            5001 => Self::PaymentFailed,
            6001 => Self::DishNotFound,
            6002 => Self::DishUnavailable,
            6003 => Self::MenuNotFound,
            7001 => Self::TableNotFound,
            7002 => Self::TableTokenInvalid,
            7003 => Self::TableHidden,
            9001 => Self::InternalError,
            9002 => Self::NetworkError,
            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}
