//! # Line Item Client
use super::recover_entity_error;
use crate::line_item_actor::LineItemError;
use crate::model::{LineItemCreate, LineItemId, OrderId, OrderLineItem};
use async_trait::async_trait;
use tracing::{debug, instrument};
use trattoria_actors::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Line Item actor.
#[derive(Clone)]
pub struct LineItemClient {
    inner: ResourceClient<OrderLineItem>,
}

impl LineItemClient {
    pub fn new(inner: ResourceClient<OrderLineItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_line_item(&self, params: LineItemCreate) -> Result<LineItemId, LineItemError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Line items belonging to one order, in insertion order.
    #[instrument(skip(self))]
    pub async fn for_order(&self, order_id: OrderId) -> Result<Vec<OrderLineItem>, LineItemError> {
        let mut items = self.list().await?;
        items.retain(|item| item.order_id == order_id);
        Ok(items)
    }
}

#[async_trait]
impl ActorClient<OrderLineItem> for LineItemClient {
    type Error = LineItemError;

    fn inner(&self) -> &ResourceClient<OrderLineItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_entity_error(e, |id| {
            LineItemError::ActorCommunicationError(format!("Line item not found: {id}"))
        })
    }
}
