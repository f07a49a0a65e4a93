//! # Notification Channel
//!
//! Fan-out of order events to every connected dashboard viewer.
//!
//! Each viewer gets an unbounded queue. [`NotificationChannel::broadcast`] serializes the
//! event once and pushes the same text into every queue; the viewer's own task drains
//! its queue into the socket, so a slow socket only grows its own backlog and never
//! holds up the others. A queue whose receiving side is gone is dropped from the set on
//! the next send.
//!
//! Nothing is persisted or replayed: a viewer that connects late catches up by querying
//! the order endpoints.

use crate::model::{Order, OrderDetail, OrderId, OrderStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub type ViewerId = u64;

/// Server-to-viewer messages, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushMessage {
    NewOrder {
        order: OrderDetail,
    },
    OrderStatusUpdate {
        #[serde(rename = "orderId")]
        order_id: OrderId,
        status: OrderStatus,
        order: Order,
    },
    Pong,
}

impl PushMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            PushMessage::NewOrder { .. } => "new_order",
            PushMessage::OrderStatusUpdate { .. } => "order_status_update",
            PushMessage::Pong => "pong",
        }
    }
}

/// Viewer-to-server messages. Anything that does not parse as one of these is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerMessage {
    Ping,
}

/// A registered viewer: its id and the queue its socket task drains.
#[derive(Debug)]
pub struct Viewer {
    pub id: ViewerId,
    pub outbox: mpsc::UnboundedReceiver<Arc<str>>,
}

/// Outcome of one broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    pub delivered: usize,
    pub dropped: usize,
}

#[derive(Debug, Default)]
pub struct NotificationChannel {
    viewers: Mutex<HashMap<ViewerId, mpsc::UnboundedSender<Arc<str>>>>,
    next_id: AtomicU64,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    // No code path panics while holding the lock; a poisoned map is still consistent.
    fn viewers(&self) -> MutexGuard<'_, HashMap<ViewerId, mpsc::UnboundedSender<Arc<str>>>> {
        self.viewers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a viewer. It receives every broadcast issued after this returns.
    pub fn connect(&self) -> Viewer {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let (sender, outbox) = mpsc::unbounded_channel();
        let count = {
            let mut viewers = self.viewers();
            viewers.insert(id, sender);
            viewers.len()
        };
        info!(viewer = id, viewers = count, "Viewer connected");
        Viewer { id, outbox }
    }

    /// Remove a viewer. Safe to call more than once.
    pub fn disconnect(&self, id: ViewerId) {
        let (removed, count) = {
            let mut viewers = self.viewers();
            let removed = viewers.remove(&id).is_some();
            (removed, viewers.len())
        };
        if removed {
            info!(viewer = id, viewers = count, "Viewer disconnected");
        }
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers().len()
    }

    /// Deliver `message` to every connected viewer.
    ///
    /// Never fails: a serialization error is logged and nothing is sent, and a viewer
    /// whose queue is closed is dropped while delivery to the rest continues.
    pub fn broadcast(&self, message: &PushMessage) -> Delivery {
        let text: Arc<str> = match serde_json::to_string(message) {
            Ok(text) => text.into(),
            Err(e) => {
                error!(event = message.kind(), error = %e, "Failed to serialize event");
                return Delivery::default();
            }
        };

        let mut delivery = Delivery::default();
        self.viewers().retain(|id, sender| {
            if sender.send(text.clone()).is_ok() {
                delivery.delivered += 1;
                true
            } else {
                warn!(viewer = *id, "Dropping unreachable viewer");
                delivery.dropped += 1;
                false
            }
        });

        info!(
            event = message.kind(),
            delivered = delivery.delivered,
            dropped = delivery.dropped,
            "Broadcast"
        );
        delivery
    }

    /// Deliver `message` to one viewer only. Returns false if the viewer is gone.
    pub fn send_to(&self, id: ViewerId, message: &PushMessage) -> bool {
        let text = match serde_json::to_string(message) {
            Ok(text) => text,
            Err(e) => {
                error!(event = message.kind(), error = %e, "Failed to serialize event");
                return false;
            }
        };
        let mut viewers = self.viewers();
        let sent = viewers
            .get(&id)
            .map(|sender| sender.send(text.into()).is_ok())
            .unwrap_or(false);
        if !sent && viewers.remove(&id).is_some() {
            warn!(viewer = id, "Dropping unreachable viewer");
        }
        sent
    }

    /// React to one text frame from a viewer.
    pub fn handle_viewer_text(&self, id: ViewerId, text: &str) {
        match serde_json::from_str::<ViewerMessage>(text) {
            Ok(ViewerMessage::Ping) => {
                debug!(viewer = id, "Ping");
                self.send_to(id, &PushMessage::Pong);
            }
            Err(e) => {
                debug!(viewer = id, error = %e, payload = text, "Ignoring viewer message");
            }
        }
    }
}
