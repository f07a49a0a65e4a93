//! A customer order.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](trattoria_actors::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](trattoria_actors::ResourceActor).
//!
//! The only mutation after creation is a status change ([`OrderStatusUpdate`]).
//! `total` and `created_at` are fixed at creation.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in the kitchen.
///
/// `pending → preparing → ready → completed`, with `cancelled` reachable from
/// `pending` and `preparing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the kitchen workflow allows moving from `self` to `next`.
    ///
    /// Rewriting the current status is always allowed.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (*self, next) {
            (from, to) if from == to => true,
            (Pending, Preparing | Cancelled) => true,
            (Preparing, Ready | Cancelled) => true,
            (Ready, Completed) => true,
            _ => false,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid status")]
pub struct InvalidStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Local>,
}

/// Payload for creating a new order. New orders always start `pending`.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub total: Decimal,
}

/// Payload for the one update an order supports.
#[derive(Debug, Clone, Copy)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

impl Order {
    /// Creates a pending order stamped with the current local time.
    pub fn new(id: OrderId, customer_name: String, total: Decimal) -> Self {
        Self {
            id,
            customer_name,
            total,
            status: OrderStatus::Pending,
            created_at: Local::now(),
        }
    }
}
