//! Realtime events
//!
//! ```text
//! backend push ──► EventChannel (broadcast)
//!                        │
//!                        └── InvalidationRouter
//!                               ├── mpsc ──► Orders refetch
//!                               ├── mpsc ──► Guests refetch
//!                               └── ...      (one channel per QueryKey)
//! ```
//!
//! The channel is opened when a session starts and closed on logout.
//! Closing drops the sender, so every subscriber (and the router) stops.

mod router;

pub use router::{InvalidationRouter, Invalidations};

use std::sync::Arc;

use parking_lot::RwLock;
use shared::event::RealtimeEvent;
use tokio::sync::broadcast;

use crate::{ClientError, ClientResult};

/// Broadcast channel for realtime events of the current session
#[derive(Debug, Clone)]
pub struct EventChannel {
    sender: Arc<RwLock<Option<broadcast::Sender<RealtimeEvent>>>>,
    capacity: usize,
}

impl EventChannel {
    /// Create a closed channel; `open` connects it
    pub fn new(capacity: usize) -> Self {
        Self {
            sender: Arc::new(RwLock::new(None)),
            capacity: capacity.max(1),
        }
    }

    /// Open the channel; a no-op when already open
    pub fn open(&self) {
        let mut sender = self.sender.write();
        if sender.is_none() {
            let (tx, _) = broadcast::channel(self.capacity);
            *sender = Some(tx);
            tracing::debug!(capacity = self.capacity, "Event channel opened");
        }
    }

    /// Close the channel; subscribers observe `Closed`
    pub fn close(&self) {
        if self.sender.write().take().is_some() {
            tracing::debug!("Event channel closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.sender.read().is_some()
    }

    /// Publish an event; returns the number of subscribers reached
    ///
    /// An open channel without subscribers reaches zero and is not an error.
    pub fn publish(&self, event: RealtimeEvent) -> ClientResult<usize> {
        let sender = self.sender.read();
        let tx = sender.as_ref().ok_or(ClientError::ChannelClosed)?;
        tracing::trace!(event = event.name(), "Publishing realtime event");
        Ok(tx.send(event).unwrap_or(0))
    }

    /// Parse a named event from the wire and publish it
    pub fn publish_named(&self, name: &str, data: serde_json::Value) -> ClientResult<usize> {
        let event = RealtimeEvent::from_named(name, data)?;
        self.publish(event)
    }

    pub fn subscribe(&self) -> ClientResult<broadcast::Receiver<RealtimeEvent>> {
        self.sender
            .read()
            .as_ref()
            .map(broadcast::Sender::subscribe)
            .ok_or(ClientError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_closed_until_opened() {
        let channel = EventChannel::new(8);
        assert!(!channel.is_open());
        assert!(matches!(
            channel.publish(RealtimeEvent::CountCallWaiter(1)),
            Err(ClientError::ChannelClosed)
        ));
        assert!(channel.subscribe().is_err());

        channel.open();
        assert!(channel.is_open());
        assert_eq!(channel.publish(RealtimeEvent::CountCallWaiter(1)).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_publish_and_subscribe() {
        let channel = EventChannel::new(8);
        channel.open();
        let mut rx = channel.subscribe().unwrap();

        let reached = channel.publish_named("count-call-waiter", json!(3)).unwrap();
        assert_eq!(reached, 1);
        assert_eq!(rx.recv().await.unwrap(), RealtimeEvent::CountCallWaiter(3));
    }

    #[tokio::test]
    async fn test_publish_named_rejects_unknown_event() {
        let channel = EventChannel::new(8);
        channel.open();
        assert!(matches!(
            channel.publish_named("table-moved", json!({})),
            Err(ClientError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_close_ends_subscribers() {
        let channel = EventChannel::new(8);
        channel.open();
        let mut rx = channel.subscribe().unwrap();
        let clone = channel.clone();

        clone.close();
        assert!(!channel.is_open());
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
