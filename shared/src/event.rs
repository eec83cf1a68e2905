//! Realtime events
//!
//! Named events pushed by the backend over its realtime channel. Each event
//! tells the client which cached lists became stale; the client refetches
//! them instead of patching local state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Order, Payment, WaiterCall};

/// Realtime event with its payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum RealtimeEvent {
    /// Staff changed an order's status, dish or quantity
    #[serde(rename = "update-order")]
    UpdateOrder(Order),
    /// A guest submitted a cart, or staff created orders
    #[serde(rename = "new-order")]
    NewOrder(Vec<Order>),
    /// Orders were settled for a guest
    #[serde(rename = "payment")]
    Payment(Vec<Order>),
    #[serde(rename = "payment-completed")]
    PaymentCompleted(Payment),
    /// Every payment of a table group completed
    #[serde(rename = "payment-group-completed")]
    PaymentGroupCompleted(Vec<Payment>),
    /// Number of open waiter calls
    #[serde(rename = "count-call-waiter")]
    CountCallWaiter(u32),
    #[serde(rename = "guest:call-waiter")]
    GuestCallWaiter(WaiterCall),
}

/// Cached list a client keeps and refetches on invalidation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QueryKey {
    Orders,
    Guests,
    Tables,
    Dishes,
    Payments,
    Indicators,
    WaiterCalls,
}

impl QueryKey {
    pub const ALL: [QueryKey; 7] = [
        QueryKey::Orders,
        QueryKey::Guests,
        QueryKey::Tables,
        QueryKey::Dishes,
        QueryKey::Payments,
        QueryKey::Indicators,
        QueryKey::WaiterCalls,
    ];
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Orders => "orders",
            Self::Guests => "guests",
            Self::Tables => "tables",
            Self::Dishes => "dishes",
            Self::Payments => "payments",
            Self::Indicators => "indicators",
            Self::WaiterCalls => "waiter_calls",
        };
        f.write_str(name)
    }
}

impl RealtimeEvent {
    /// Every event name the backend emits
    pub const NAMES: [&'static str; 7] = [
        "update-order",
        "new-order",
        "payment",
        "payment-completed",
        "payment-group-completed",
        "count-call-waiter",
        "guest:call-waiter",
    ];

    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateOrder(_) => "update-order",
            Self::NewOrder(_) => "new-order",
            Self::Payment(_) => "payment",
            Self::PaymentCompleted(_) => "payment-completed",
            Self::PaymentGroupCompleted(_) => "payment-group-completed",
            Self::CountCallWaiter(_) => "count-call-waiter",
            Self::GuestCallWaiter(_) => "guest:call-waiter",
        }
    }

    /// Parse a named event and its JSON payload
    pub fn from_named(name: &str, data: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::json!({ "event": name, "data": data }))
    }

    /// Cached lists made stale by this event
    pub fn invalidates(&self) -> &'static [QueryKey] {
        match self {
            Self::UpdateOrder(_) => &[QueryKey::Orders, QueryKey::Indicators],
            Self::NewOrder(_) => &[QueryKey::Orders, QueryKey::Guests, QueryKey::Indicators],
            Self::Payment(_) => &[QueryKey::Orders, QueryKey::Payments, QueryKey::Indicators],
            Self::PaymentCompleted(_) | Self::PaymentGroupCompleted(_) => {
                &[QueryKey::Payments, QueryKey::Orders]
            }
            Self::CountCallWaiter(_) | Self::GuestCallWaiter(_) => &[QueryKey::WaiterCalls],
        }
    }

    /// Orders carried by the event, if any
    pub fn orders(&self) -> &[Order] {
        match self {
            Self::UpdateOrder(order) => std::slice::from_ref(order),
            Self::NewOrder(orders) | Self::Payment(orders) => orders,
            _ => &[],
        }
    }
}

impl fmt::Display for RealtimeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_named_count() {
        let event = RealtimeEvent::from_named("count-call-waiter", json!(3)).unwrap();
        assert_eq!(event, RealtimeEvent::CountCallWaiter(3));
        assert_eq!(event.name(), "count-call-waiter");
        assert_eq!(event.invalidates(), &[QueryKey::WaiterCalls]);
    }

    #[test]
    fn test_from_named_guest_call() {
        let event = RealtimeEvent::from_named(
            "guest:call-waiter",
            json!({
                "guestId": 5,
                "guestName": "An",
                "tableNumber": 2,
                "createdAt": "2026-10-18T09:30:00Z"
            }),
        )
        .unwrap();
        match event {
            RealtimeEvent::GuestCallWaiter(call) => {
                assert_eq!(call.guest_id, 5);
                assert_eq!(call.table_number, Some(2));
            }
            other => panic!("unexpected event {}", other),
        }
    }

    #[test]
    fn test_unknown_event_rejected() {
        assert!(RealtimeEvent::from_named("refresh-everything", json!(null)).is_err());
    }

    #[test]
    fn test_empty_new_order_batch() {
        let event = RealtimeEvent::from_named("new-order", json!([])).unwrap();
        assert!(event.orders().is_empty());
        assert!(event.invalidates().contains(&QueryKey::Orders));
    }

    #[test]
    fn test_names_cover_variants() {
        let events = [
            RealtimeEvent::NewOrder(vec![]),
            RealtimeEvent::Payment(vec![]),
            RealtimeEvent::PaymentGroupCompleted(vec![]),
            RealtimeEvent::CountCallWaiter(0),
        ];
        for event in events {
            assert!(RealtimeEvent::NAMES.contains(&event.name()));
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["event"], event.name());
        }
    }
}
