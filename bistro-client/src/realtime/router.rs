//! Invalidation router
//!
//! Subscribes to the event channel and fans each event out to one bounded
//! mpsc channel per [`QueryKey`] it invalidates. Delivery is best-effort:
//! a full channel drops the event.

use std::collections::HashMap;
use std::sync::Arc;

use shared::event::{QueryKey, RealtimeEvent};
use tokio::sync::{broadcast, mpsc};

/// Receivers handed out by [`InvalidationRouter::new`]
#[derive(Debug)]
pub struct Invalidations {
    receivers: HashMap<QueryKey, mpsc::Receiver<Arc<RealtimeEvent>>>,
}

impl Invalidations {
    /// Take the receiver for `key`; `None` once taken
    pub fn take(&mut self, key: QueryKey) -> Option<mpsc::Receiver<Arc<RealtimeEvent>>> {
        self.receivers.remove(&key)
    }
}

pub struct InvalidationRouter {
    senders: HashMap<QueryKey, mpsc::Sender<Arc<RealtimeEvent>>>,
}

impl InvalidationRouter {
    /// Create the router and one channel of `buffer` slots per key
    pub fn new(buffer: usize) -> (Self, Invalidations) {
        let buffer = buffer.max(1);
        let mut senders = HashMap::new();
        let mut receivers = HashMap::new();
        for key in QueryKey::ALL {
            let (tx, rx) = mpsc::channel(buffer);
            senders.insert(key, tx);
            receivers.insert(key, rx);
        }
        (Self { senders }, Invalidations { receivers })
    }

    /// Run until the source channel closes
    pub async fn run(self, mut source: broadcast::Receiver<RealtimeEvent>) {
        tracing::info!("Invalidation router started");

        loop {
            match source.recv().await {
                Ok(event) => self.dispatch(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Invalidation router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event channel closed, invalidation router stopping");
                    break;
                }
            }
        }
    }

    fn dispatch(&self, event: RealtimeEvent) {
        let event = Arc::new(event);
        for key in event.invalidates() {
            let Some(tx) = self.senders.get(key) else {
                continue;
            };
            match tx.try_send(Arc::clone(&event)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(
                        key = %key,
                        event = event.name(),
                        "Invalidation channel full, event dropped"
                    );
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    tracing::trace!(key = %key, "Invalidation channel closed");
                }
            }
        }
    }
}
