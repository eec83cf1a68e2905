//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AccountSummary, DishStatus, GuestId, Id, TableNumber};

/// Order status
///
/// `Paid` and `Rejected` are terminal; the backend never moves an order out
/// of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Rejected,
    Delivered,
    Paid,
}

impl OrderStatus {
    /// All statuses, in display order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Rejected,
        OrderStatus::Delivered,
        OrderStatus::Paid,
    ];

    /// Whether no further transition is possible
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Paid | Self::Rejected)
    }

    /// Whether the owning guest is still being served
    pub fn is_serving(self) -> bool {
        !self.is_terminal()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Rejected => "Rejected",
            Self::Delivered => "Delivered",
            Self::Paid => "Paid",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dine-in vs take-out
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderMode {
    #[default]
    DineIn,
    TakeOut,
}

/// Dish snapshot captured when the order was placed
///
/// Decoupled from the live dish record: later edits to the dish do not
/// change what the guest ordered or what they pay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishSnapshot {
    pub id: Id,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: DishStatus,
    /// Live dish reference (null once the dish is deleted)
    pub dish_id: Option<Id>,
}

/// Guest reference embedded in an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuestRef {
    pub id: GuestId,
    pub name: String,
    pub table_number: Option<TableNumber>,
}

/// Order entity - one ordered dish line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Id,
    /// Owning guest (null once the guest is deleted)
    pub guest_id: Option<GuestId>,
    #[serde(default)]
    pub guest: Option<GuestRef>,
    /// Table number (null once the table is deleted)
    pub table_number: Option<TableNumber>,
    pub dish_snapshot: DishSnapshot,
    pub quantity: i32,
    pub status: OrderStatus,
    #[serde(default)]
    pub mode: OrderMode,
    /// Staff member who last handled the order
    #[serde(default)]
    pub order_handler_id: Option<Id>,
    #[serde(default)]
    pub order_handler: Option<AccountSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Line total (snapshot price x quantity)
    pub fn line_total(&self) -> Decimal {
        self.dish_snapshot.price * Decimal::from(self.quantity)
    }

    /// Guest display name, if the guest still exists
    pub fn guest_name(&self) -> Option<&str> {
        self.guest.as_ref().map(|g| g.name.as_str())
    }
}

/// One cart line submitted as an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub dish_id: Id,
    pub quantity: i32,
}

/// Staff-created orders payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrders {
    /// Existing guest; `None` together with `guest_name` creates a new guest
    pub guest_id: Option<GuestId>,
    pub table_number: TableNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub mode: OrderMode,
    pub orders: Vec<OrderItemInput>,
}

/// Update order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    pub status: OrderStatus,
    pub dish_id: Id,
    pub quantity: i32,
}

/// Pay all open orders of a guest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayGuestOrders {
    pub guest_id: GuestId,
}
