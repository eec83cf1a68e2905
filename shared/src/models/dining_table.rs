//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TableNumber;

/// Table status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TableStatus {
    #[default]
    Available,
    Reserved,
    Hidden,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub number: TableNumber,
    pub capacity: i32,
    pub status: TableStatus,
    /// Access token encoded in the table QR code
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiningTable {
    /// Guest login URL encoded in the table QR code; the token is
    /// form-encoded into the query
    pub fn guest_login_url(&self, base_url: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("token", &self.token)
            .finish();
        format!(
            "{}/tables/{}?{}",
            base_url.trim_end_matches('/'),
            self.number,
            query
        )
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub number: TableNumber,
    pub capacity: i32,
    pub status: Option<TableStatus>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
    /// Rotate the QR token, invalidating existing guest sessions
    #[serde(default)]
    pub change_token: bool,
}
