//! Publish notification hub.
//!
//! Server-side counterpart of the site's dual-channel refresh signal: a
//! broadcast channel pushes publish events to connected subscribers (the
//! SSE feed), and a last-published timestamp serves pollers that never
//! attached a receiver. Subscribers react by refetching the published
//! bundle, so duplicate or dropped deliveries are harmless.

use chrono::Utc;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Capacity of the in-process event channel; laggards just refetch
const CHANNEL_CAPACITY: usize = 16;

/// One publish signal
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PublishEvent {
    /// Unix milliseconds of the publish
    pub ts: i64,
}

/// Shared hub handed to every handler through the app state
#[derive(Clone)]
pub struct PublishHub {
    tx: broadcast::Sender<PublishEvent>,
    last: Arc<AtomicI64>,
}

impl PublishHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        PublishHub {
            tx,
            last: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Signal that a new bundle went live
    pub fn notify(&self) {
        let ts = Utc::now().timestamp_millis();
        self.last.store(ts, Ordering::SeqCst);
        // No receivers is fine; the timestamp fallback still advances
        let _ = self.tx.send(PublishEvent { ts });
    }

    /// Attach a live event receiver
    pub fn subscribe(&self) -> broadcast::Receiver<PublishEvent> {
        self.tx.subscribe()
    }

    /// Unix milliseconds of the most recent publish, if any this process
    pub fn last_published(&self) -> Option<i64> {
        match self.last.load(Ordering::SeqCst) {
            0 => None,
            ts => Some(ts),
        }
    }
}

impl Default for PublishHub {
    fn default() -> Self {
        Self::new()
    }
}
