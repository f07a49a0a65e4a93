//! One row of an order: which menu item, how many, and the unit price at the time the
//! order was placed.

use crate::model::{CatalogItemId, OrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub u32);

impl From<u32> for LineItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// A line item. `order_id` and `menu_item_id` never change once stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub id: LineItemId,
    pub order_id: OrderId,
    pub menu_item_id: CatalogItemId,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderLineItem {
    /// Price times quantity, `None` when it does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone)]
pub struct LineItemCreate {
    pub order_id: OrderId,
    pub menu_item_id: CatalogItemId,
    pub quantity: u32,
    pub price: Decimal,
}
