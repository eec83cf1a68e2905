//! API Response types
//!
//! Envelope used by every backend endpoint

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// ```json
/// {
///     "message": "Get orders successfully",
///     "data": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Human-readable message
    pub message: String,
    /// Response data (absent for acknowledgements)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a data-less response
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// Take the payload, if any
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Field-level error reported by form validation (HTTP 422)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error body returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Date range query used by list and indicator endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub from_date: chrono::DateTime<chrono::Utc>,
    pub to_date: chrono::DateTime<chrono::Utc>,
}

impl DateRange {
    pub fn new(
        from_date: chrono::DateTime<chrono::Utc>,
        to_date: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self { from_date, to_date }
    }

    /// Current UTC day, midnight to midnight
    pub fn today() -> Self {
        let now = chrono::Utc::now();
        let start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or(now);
        Self::new(start, start + chrono::Duration::days(1))
    }

    pub fn contains(&self, at: chrono::DateTime<chrono::Utc>) -> bool {
        at >= self.from_date && at <= self.to_date
    }
}
