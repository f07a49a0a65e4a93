//! # Order Actor
//!
//! Keeps orders and guards their status changes.
//!
//! ## Context
//!
//! The actor's context is a [`TransitionPolicy`]. With [`TransitionPolicy::Permissive`]
//! any status may be written over any other; with [`TransitionPolicy::Strict`] an
//! update must follow
//! [`OrderStatus::can_transition_to`](crate::model::OrderStatus::can_transition_to) and is
//! otherwise rejected with [`OrderError::IllegalTransition`], leaving the stored
//! order untouched.
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run(TransitionPolicy::Strict));
//! ```

pub mod entity;
pub mod error;

pub use entity::OrderAction;
pub use error::*;

use crate::model::Order;
use trattoria_actors::{ResourceActor, ResourceClient};

/// How strictly status updates are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Any status can follow any other.
    #[default]
    Permissive,
    /// Only the kitchen workflow's edges are allowed.
    Strict,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
