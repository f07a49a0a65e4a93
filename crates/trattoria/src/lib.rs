//! # Trattoria
//!
//! Order lifecycle and live notifications for a restaurant: customers submit carts,
//! the kitchen dashboard lists orders, moves them through
//! `pending → preparing → ready → completed` (or `cancelled`) and is pushed every
//! change over a WebSocket.
//!
//! ## Core Components
//!
//! - **[model]**: plain data for menu items, orders and line items, and the joined read models
//! - **[catalog_actor], [order_actor], [line_item_actor]**: one record-store actor per kind
//!   (see [`trattoria_actors`])
//! - **[clients]**: typed wrappers over each actor's mailbox
//! - **[service]**: [`OrderService`](service::OrderService), the operations behind the API
//! - **[notify]**: the [`NotificationChannel`](notify::NotificationChannel) fan-out
//! - **[stats]**: daily dashboard figures
//! - **[http]**: axum routes and the `/ws` endpoint
//! - **[lifecycle]**: starting, seeding and stopping the actors
//!
//! ## Testing
//!
//! See [`trattoria_actors::mock`] for utilities to test clients and hooks without
//! spawning every actor.

pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod line_item_actor;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod seed;
pub mod service;
pub mod stats;
