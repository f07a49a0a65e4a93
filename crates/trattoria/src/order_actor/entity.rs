//! Entity trait implementation for the [`Order`] record.
//!
//! Creation stamps the order `pending` with the current time. The only update is a
//! status change, checked against the actor's [`TransitionPolicy`].

use super::{OrderError, TransitionPolicy};
use crate::model::{Order, OrderCreate, OrderId, OrderStatusUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;
use trattoria_actors::ActorEntity;

/// Orders have no custom actions.
#[derive(Debug)]
pub enum OrderAction {}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderStatusUpdate;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = TransitionPolicy;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let customer_name = params.customer_name.trim();
        if customer_name.is_empty() {
            return Err(OrderError::ValidationError(
                "Customer name is required".to_string(),
            ));
        }
        if params.total < Decimal::ZERO {
            return Err(OrderError::ValidationError(
                "Order total must not be negative".to_string(),
            ));
        }
        Ok(Order::new(id, customer_name.to_string(), params.total))
    }

    async fn on_update(
        &mut self,
        update: OrderStatusUpdate,
        policy: &TransitionPolicy,
    ) -> Result<(), Self::Error> {
        if *policy == TransitionPolicy::Strict && !self.status.can_transition_to(update.status) {
            return Err(OrderError::IllegalTransition {
                from: self.status,
                to: update.status,
            });
        }
        debug!(id = %self.id, from = %self.status, to = %update.status, "Status change");
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _policy: &TransitionPolicy,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use rust_decimal_macros::dec;

    fn pending() -> Order {
        Order::from_create_params(
            OrderId(1),
            OrderCreate {
                customer_name: " Alice ".into(),
                total: dec!(17.98),
            },
        )
        .unwrap()
    }

    #[test]
    fn new_orders_start_pending_with_trimmed_name() {
        let order = pending();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.customer_name, "Alice");
        assert_eq!(order.total, dec!(17.98));
    }

    #[test]
    fn blank_customer_is_rejected() {
        let result = Order::from_create_params(
            OrderId(1),
            OrderCreate {
                customer_name: "  ".into(),
                total: dec!(1),
            },
        );
        assert_eq!(
            result.unwrap_err(),
            OrderError::ValidationError("Customer name is required".into())
        );
    }

    #[tokio::test]
    async fn permissive_policy_allows_any_jump() {
        let mut order = pending();
        let update = OrderStatusUpdate {
            status: OrderStatus::Completed,
        };
        order
            .on_update(update, &TransitionPolicy::Permissive)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn strict_policy_rejects_skipping_the_kitchen() {
        let mut order = pending();
        let update = OrderStatusUpdate {
            status: OrderStatus::Ready,
        };
        let err = order
            .on_update(update, &TransitionPolicy::Strict)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::IllegalTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready,
            }
        );

        let update = OrderStatusUpdate {
            status: OrderStatus::Preparing,
        };
        order
            .on_update(update, &TransitionPolicy::Strict)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
    }
}
