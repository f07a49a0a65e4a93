//! # Trattoria Actors
//!
//! The record store behind the Trattoria order service, built as one Tokio actor per
//! record kind. Each kind (catalog items, orders, order line items) is a type that
//! implements [`ActorEntity`]; a generic [`ResourceActor`] owns the records of that kind
//! and a cloneable [`ResourceClient`] talks to it.
//!
//! ## Why one actor per record kind?
//!
//! - **Serialized writes without locks**: each actor processes its mailbox sequentially,
//!   so two status updates to the same order can never interleave.
//! - **Unique, monotonic ids**: the counter lives inside the actor task.
//! - **Uniform surface**: every kind gets Create / Get / List / Update / Delete / Action,
//!   written once here.
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - record data plus lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - mailbox processing and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not to the constructor. This lets
//! the line-item actor hold a catalog client (to check references at insert time) even
//! though both actors are created side by side:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog_client) = ResourceActor::<CatalogItem>::new(32);
//! let (line_item_actor, line_item_client) = ResourceActor::<OrderLineItem>::new(32);
//!
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(line_item_actor.run(CatalogClient::new(catalog_client.clone())));
//! ```
//!
//! ## Shutdown
//!
//! An actor stops when every clone of its client has been dropped: `recv()` returns
//! `None`, the loop logs the final store size and the task ends.
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which answers client requests from scripted
//! expectations so a hook or service can be tested without its dependencies running.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
