//! # Catalog Actor
//!
//! Keeps the menu. Catalog items have no dependencies (`Context = ()`), no updates and no
//! custom actions: they are inserted at startup or by an operator and then only read.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](trattoria_actors::ActorEntity) implementation for
//!   [`CatalogItem`](crate::model::CatalogItem)
//! - [`error`] - [`CatalogError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use trattoria::catalog_actor;
//! use trattoria::clients::CatalogClient;
//! use trattoria::model::{CatalogItemCreate, Category};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog_actor::new(8);
//!     let client = CatalogClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_item(CatalogItemCreate::new(
//!             "Cannoli",
//!             "Crispy pastry shells filled with sweet ricotta",
//!             Decimal::new(699, 2),
//!             Category::Desserts,
//!             "",
//!         ))
//!         .await?;
//!
//!     let desserts = client.list_by_category(Some(Category::Desserts)).await?;
//!     assert_eq!(desserts[0].id, id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::{CatalogItemAction, CatalogItemUpdate};
pub use error::*;

use crate::model::CatalogItem;
use trattoria_actors::{ResourceActor, ResourceClient};

/// Creates a new Catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CatalogItem>, ResourceClient<CatalogItem>) {
    ResourceActor::new(buffer_size)
}
