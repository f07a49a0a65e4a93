//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and adds status handling and filtered listings.
use super::recover_entity_error;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderStatusUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use trattoria_actors::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Overwrite the order's status and return the stored order.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let order = self
            .inner
            .update(id, OrderStatusUpdate { status })
            .await
            .map_err(Self::map_error)?;
        info!(%id, %status, "Status updated");
        Ok(order)
    }

    /// Orders newest first, optionally restricted to one status.
    ///
    /// Orders created within the same clock tick keep a stable order: the later id wins.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        if let Some(status) = status {
            orders.retain(|o| o.status == status);
        }
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_entity_error(e, OrderError::NotFound)
    }
}
