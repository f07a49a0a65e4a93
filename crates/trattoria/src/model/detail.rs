//! Read models that join an order with its line items and their menu entries.
//!
//! These are assembled by the order service and are never stored.

use crate::model::{CatalogItem, Order, OrderLineItem};
use serde::Serialize;

/// An order with every line item and the menu entry each one refers to.
///
/// Serializes as the order's own fields plus `orderItems`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub order_items: Vec<LineItemDetail>,
}

/// A line item's own fields plus `menuItem`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDetail {
    #[serde(flatten)]
    pub line_item: OrderLineItem,
    pub menu_item: CatalogItem,
}
