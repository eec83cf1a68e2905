//! Guest Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GuestId, TableNumber};

/// Guest entity - a table session participant created at check-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub table_number: Option<TableNumber>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Staff check-in of a new guest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCreate {
    pub name: String,
    pub table_number: TableNumber,
}

/// Guest login from the table QR code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestLoginRequest {
    pub name: String,
    pub table_number: TableNumber,
    /// Table access token carried by the QR code
    pub token: String,
}

/// Waiter call raised by a guest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaiterCall {
    pub guest_id: GuestId,
    pub guest_name: String,
    pub table_number: Option<TableNumber>,
    pub created_at: DateTime<Utc>,
}
