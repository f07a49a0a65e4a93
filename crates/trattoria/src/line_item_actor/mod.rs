//! # Line Item Actor
//!
//! Keeps order line items. Its context is a [`CatalogClient`](crate::clients::CatalogClient):
//! `on_create` refuses a line item whose menu item does not exist, so the store never
//! holds a dangling catalog reference it could have caught at insert time.
//!
//! ```rust,ignore
//! let (line_item_actor, line_item_client) = line_item_actor::new(32);
//! tokio::spawn(line_item_actor.run(catalog_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use entity::{LineItemAction, LineItemUpdate};
pub use error::*;

use crate::model::OrderLineItem;
use trattoria_actors::{ResourceActor, ResourceClient};

/// Creates a new Line Item actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderLineItem>, ResourceClient<OrderLineItem>) {
    ResourceActor::new(buffer_size)
}
