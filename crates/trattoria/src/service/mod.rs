//! # Order Service
//!
//! The operations behind the HTTP surface: placing orders, moving them through the
//! kitchen, the catalog reads and the dashboard figures.
//!
//! The service owns no data. It talks to the three record-store actors through their
//! typed clients and publishes order events on the [`NotificationChannel`]. Broadcast
//! happens only after the store has accepted the write, and its outcome never changes
//! the caller's result.
//!
//! ## Placing an order
//!
//! ```text
//! validate ─► order actor: create (pending, total) ─► line-item actor: create × n
//!                                                      │ failure: delete stored lines + order
//!                                                      ▼
//!                                  assemble OrderDetail ─► broadcast new_order ─► caller
//! ```

pub mod error;

mod catalog;
mod orders;

pub use error::ServiceError;

use crate::clients::{CatalogClient, LineItemClient, OrderClient};
use crate::notify::NotificationChannel;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

/// A cart submitted for ordering.
///
/// Missing fields deserialize as empty so that they fail validation with a readable
/// message instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default, alias = "customer_name")]
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<NewOrderLine>,
}

/// One cart entry. `id` is the menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderLine {
    #[serde(rename = "id", alias = "menuItemId")]
    pub menu_item_id: u32,
    pub quantity: i64,
    pub price: Decimal,
}

impl NewOrderLine {
    pub fn new(menu_item_id: u32, quantity: i64, price: Decimal) -> Self {
        Self {
            menu_item_id,
            quantity,
            price,
        }
    }
}

pub struct OrderService {
    catalog: CatalogClient,
    orders: OrderClient,
    line_items: LineItemClient,
    notifier: Arc<NotificationChannel>,
}

impl OrderService {
    pub fn new(
        catalog: CatalogClient,
        orders: OrderClient,
        line_items: LineItemClient,
        notifier: Arc<NotificationChannel>,
    ) -> Self {
        Self {
            catalog,
            orders,
            line_items,
            notifier,
        }
    }

    pub fn notifier(&self) -> &Arc<NotificationChannel> {
        &self.notifier
    }
}
