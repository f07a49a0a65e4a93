//! Entity trait implementation for [`OrderLineItem`].

use super::LineItemError;
use crate::clients::CatalogClient;
use crate::model::{LineItemCreate, LineItemId, OrderLineItem};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::warn;
use trattoria_actors::{ActorClient, ActorEntity};

/// Line items are never updated.
#[derive(Debug)]
pub enum LineItemUpdate {}

/// Line items have no custom actions.
#[derive(Debug)]
pub enum LineItemAction {}

#[async_trait]
impl ActorEntity for OrderLineItem {
    type Id = LineItemId;
    type Create = LineItemCreate;
    type Update = LineItemUpdate;
    type Action = LineItemAction;
    type ActionResult = ();
    type Context = CatalogClient;
    type Error = LineItemError;

    fn from_create_params(id: LineItemId, params: LineItemCreate) -> Result<Self, Self::Error> {
        if params.quantity == 0 {
            return Err(LineItemError::ValidationError(
                "Quantity must be at least 1".to_string(),
            ));
        }
        if params.price < Decimal::ZERO {
            return Err(LineItemError::ValidationError(
                "Price must not be negative".to_string(),
            ));
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            menu_item_id: params.menu_item_id,
            quantity: params.quantity,
            price: params.price,
        })
    }

    /// Checks the menu item exists. The caller's price is kept even when it differs
    /// from the catalog's.
    async fn on_create(&mut self, catalog: &CatalogClient) -> Result<(), Self::Error> {
        let menu_item = catalog
            .get(self.menu_item_id)
            .await
            .map_err(|e| LineItemError::CatalogUnavailable(e.to_string()))?
            .ok_or(LineItemError::UnknownCatalogItem(self.menu_item_id))?;

        if menu_item.price != self.price {
            warn!(
                order_id = %self.order_id,
                menu_item_id = %self.menu_item_id,
                submitted = %self.price,
                catalog = %menu_item.price,
                "Line price differs from catalog"
            );
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: LineItemUpdate,
        _catalog: &CatalogClient,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: LineItemAction,
        _catalog: &CatalogClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
