//! Entity trait implementation for [`CatalogItem`].

use super::CatalogError;
use crate::model::{CatalogItem, CatalogItemCreate, CatalogItemId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use trattoria_actors::ActorEntity;

/// Catalog items are never updated.
#[derive(Debug)]
pub enum CatalogItemUpdate {}

/// Catalog items have no custom actions.
#[derive(Debug)]
pub enum CatalogItemAction {}

#[async_trait]
impl ActorEntity for CatalogItem {
    type Id = CatalogItemId;
    type Create = CatalogItemCreate;
    type Update = CatalogItemUpdate;
    type Action = CatalogItemAction;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    /// Rejects a blank name or a negative price; nothing else is checked.
    fn from_create_params(
        id: CatalogItemId,
        params: CatalogItemCreate,
    ) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CatalogError::ValidationError(
                "Menu item name is required".to_string(),
            ));
        }
        if params.price < Decimal::ZERO {
            return Err(CatalogError::ValidationError(
                "Menu item price must not be negative".to_string(),
            ));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            description: params.description,
            price: params.price,
            category: params.category,
            image: params.image,
        })
    }

    async fn on_update(
        &mut self,
        update: CatalogItemUpdate,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CatalogItemAction,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
