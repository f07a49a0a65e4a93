use super::{NewOrder, OrderService, ServiceError};
use crate::model::{
    CatalogItemId, LineItemCreate, LineItemDetail, LineItemId, Order, OrderCreate, OrderDetail,
    OrderId, OrderStatus,
};
use crate::notify::PushMessage;
use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument, warn};
use trattoria_actors::ActorClient;

/// A cart line that passed validation.
struct ValidLine {
    menu_item_id: CatalogItemId,
    quantity: u32,
    price: Decimal,
}

/// Check the cart, reporting the first rule it breaks.
fn validate(request: &NewOrder) -> Result<Vec<ValidLine>, ServiceError> {
    if request.customer_name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Customer name is required".to_string(),
        ));
    }
    if request.items.is_empty() {
        return Err(ServiceError::Validation(
            "At least one item is required".to_string(),
        ));
    }

    request
        .items
        .iter()
        .map(|line| {
            if line.quantity < 1 {
                return Err(ServiceError::Validation(
                    "Quantity must be at least 1".to_string(),
                ));
            }
            let quantity = u32::try_from(line.quantity)
                .map_err(|_| ServiceError::Validation("Quantity is too large".to_string()))?;
            if line.price < Decimal::ZERO {
                return Err(ServiceError::Validation(
                    "Price must not be negative".to_string(),
                ));
            }
            Ok(ValidLine {
                menu_item_id: CatalogItemId(line.menu_item_id),
                quantity,
                price: line.price,
            })
        })
        .collect()
}

/// Sum of price times quantity over the cart, or a validation error when it does not
/// fit in a `Decimal`.
fn order_total(lines: &[ValidLine]) -> Result<Decimal, ServiceError> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| {
            line.price
                .checked_mul(Decimal::from(line.quantity))
                .and_then(|subtotal| total.checked_add(subtotal))
        })
        .ok_or_else(|| ServiceError::Validation("Order total is too large".to_string()))
}

impl OrderService {
    /// Persist a cart as a pending order with one line item per entry.
    ///
    /// The total is computed from the submitted prices. If any line item is rejected, or
    /// the stored order cannot be read back, the lines already stored and the order
    /// itself are deleted before the error is returned, so a failed call leaves no
    /// partial order behind. On success every connected viewer receives `new_order`
    /// with the assembled order.
    #[instrument(
        skip(self, request),
        fields(customer = %request.customer_name, lines = request.items.len())
    )]
    pub async fn create_order(&self, request: NewOrder) -> Result<OrderDetail, ServiceError> {
        let lines = validate(&request)?;
        let total = order_total(&lines)?;

        let order_id = self
            .orders
            .create_order(OrderCreate {
                customer_name: request.customer_name,
                total,
            })
            .await?;

        let mut stored = Vec::with_capacity(lines.len());
        for line in lines {
            let params = LineItemCreate {
                order_id,
                menu_item_id: line.menu_item_id,
                quantity: line.quantity,
                price: line.price,
            };
            match self.line_items.add_line_item(params).await {
                Ok(id) => stored.push(id),
                Err(e) => {
                    warn!(%order_id, error = %e, "Line item rejected, rolling back order");
                    self.discard_order(order_id, &stored).await;
                    return Err(e.into());
                }
            }
        }

        let detail = match self.get_order_with_items(order_id).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(%order_id, error = %e, "Order could not be read back, rolling back");
                self.discard_order(order_id, &stored).await;
                return Err(e);
            }
        };
        info!(%order_id, %total, "Order placed");
        self.notifier.broadcast(&PushMessage::NewOrder {
            order: detail.clone(),
        });
        Ok(detail)
    }

    /// Best effort: a failure here is logged and the original error still wins.
    async fn discard_order(&self, order_id: OrderId, line_items: &[LineItemId]) {
        for id in line_items.iter().rev() {
            if let Err(e) = self.line_items.delete(*id).await {
                error!(%order_id, line_item = %id, error = %e, "Failed to discard line item");
            }
        }
        if let Err(e) = self.orders.delete(order_id).await {
            error!(%order_id, error = %e, "Failed to discard order");
        }
    }

    /// Overwrite an order's status and tell every viewer.
    ///
    /// An unknown status name is a validation error and an unknown order is not found;
    /// in both cases nothing is written and nothing is broadcast.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        status: &str,
    ) -> Result<Order, ServiceError> {
        let status: OrderStatus = status
            .parse()
            .map_err(|e: crate::model::InvalidStatus| ServiceError::Validation(e.to_string()))?;

        let order = self.orders.update_status(order_id, status).await?;
        self.notifier.broadcast(&PushMessage::OrderStatusUpdate {
            order_id,
            status,
            order: order.clone(),
        });
        Ok(order)
    }

    /// Orders newest first. An unknown status filter matches nothing.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, status: Option<&str>) -> Result<Vec<Order>, ServiceError> {
        let status = match status {
            None => None,
            Some(raw) => match raw.parse::<OrderStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    debug!(filter = raw, "Unknown status filter");
                    return Ok(Vec::new());
                }
            },
        };
        Ok(self.orders.list_orders(status).await?)
    }

    /// The order with each line item and its menu entry.
    #[instrument(skip(self))]
    pub async fn get_order_with_items(
        &self,
        order_id: OrderId,
    ) -> Result<OrderDetail, ServiceError> {
        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))?;

        let line_items = self.line_items.for_order(order_id).await?;
        let mut order_items = Vec::with_capacity(line_items.len());
        for line_item in line_items {
            let menu_item_id = line_item.menu_item_id;
            let Some(menu_item) = self.catalog.get(menu_item_id).await? else {
                error!(%order_id, %menu_item_id, "Dangling menu item reference");
                let message = format!("Menu item not found: {}", menu_item_id.value());
                return Err(ServiceError::Integrity(message));
            };
            order_items.push(LineItemDetail {
                line_item,
                menu_item,
            });
        }

        Ok(OrderDetail { order, order_items })
    }
}
