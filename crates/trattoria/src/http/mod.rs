//! # HTTP Surface
//!
//! JSON endpoints over the [`OrderService`] plus the `/ws` push channel.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /api/menu-items?category=` | list menu items |
//! | `GET /api/menu-items/{id}` | one menu item |
//! | `GET /api/orders?status=` | orders, newest first |
//! | `GET /api/orders/{id}` | order with line items and menu entries |
//! | `POST /api/orders` | place an order (201) |
//! | `PATCH /api/orders/{id}/status` | change status |
//! | `GET /api/dashboard/stats` | today's figures |
//! | `GET /ws` | WebSocket push channel |
//!
//! Errors are `{"message": "..."}` with 400, 404 or 500.

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, patch},
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod error;
pub mod routes;
pub mod ws;

use crate::service::OrderService;
use routes::{
    create_order_handler, dashboard_stats_handler, get_menu_item_handler, get_order_handler,
    health_handler, list_menu_items_handler, list_orders_handler, update_order_status_handler,
};
use ws::ws_handler;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<OrderService>,
}

impl AppState {
    pub fn new(service: Arc<OrderService>) -> Self {
        Self { service }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/menu-items", get(list_menu_items_handler))
        .route("/api/menu-items/{id}", get(get_menu_item_handler))
        .route(
            "/api/orders",
            get(list_orders_handler).post(create_order_handler),
        )
        .route("/api/orders/{id}", get(get_order_handler))
        .route(
            "/api/orders/{id}/status",
            patch(update_order_status_handler),
        )
        .route("/api/dashboard/stats", get(dashboard_stats_handler))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve until `shutdown` resolves, then let in-flight requests finish.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!("Server running on {address}");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C or SIGTERM. A signal handler that cannot be installed never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
