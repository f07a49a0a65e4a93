//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every record kind (catalog items, orders,
//! order line items) implements to be kept by a [`ResourceActor`](crate::ResourceActor).
//! It names the id, the creation and update payloads, the custom actions, the injected
//! context and the error type, and it provides the lifecycle hooks the actor calls
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Override `on_create` when a record must be checked against
//! another store before it is accepted (a line item checks that its catalog item exists).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record kind must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` associated
/// type is handed to every hook; it is supplied to
/// [`ResourceActor::run`](crate::ResourceActor::run) rather than to the constructor, so
/// actors can be wired after they are all created.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier. Built from the actor's monotonic `u32` counter and
    /// ordered so that listings come back in allocation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a record.
    type Create: Send + Sync + Debug;

    /// Payload required to update a record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result of a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` when there are none.
    type Context: Send + Sync;

    /// Error returned by construction and hooks.
    ///
    /// One enum per record kind rather than one per message: callers match on a single
    /// `OrderError`, at the cost of every operation sharing the same variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from its freshly allocated id and the creation payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the record is stored.
    /// Returning an error rejects the create; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
