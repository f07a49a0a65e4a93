//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the three record-store actors behind the order service.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies when they start running
//! (`run(context)`), so the order of construction never matters:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog) = catalog_actor::new(buffer);
//! let (order_actor, orders) = order_actor::new(buffer);
//! let (line_item_actor, line_items) = line_item_actor::new(buffer);
//!
//! tokio::spawn(catalog_actor.run(()));
//! tokio::spawn(order_actor.run(policy));                               // TransitionPolicy
//! tokio::spawn(line_item_actor.run(CatalogClient::new(catalog.clone()))); // reference checks
//! ```
//!
//! | Actor | Context |
//! |---|---|
//! | catalog | `()` |
//! | order | [`TransitionPolicy`](crate::order_actor::TransitionPolicy) |
//! | line item | [`CatalogClient`](crate::clients::CatalogClient) |
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each mailbox
//! 2. **Actors detect closure** - `recv()` returns `None` once queued requests are served
//! 3. **Await completion** - every actor task is joined
//!
//! The line-item actor holds a catalog client in its context, so the catalog actor only
//! stops after the line-item actor has. The graph is acyclic, so closure always
//! propagates. Any clone of a client kept elsewhere (an `OrderService`, the HTTP state)
//! must be dropped before `shutdown` can complete.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](trattoria_actors::tracing::setup_tracing) once before building
//! the system; every actor logs `Actor started` and `Shutdown` with its final size.

pub mod restaurant_system;

pub use restaurant_system::*;
