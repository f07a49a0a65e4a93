//! # Trattoria server
//!
//! Loads configuration from the environment, starts the record stores, seeds the menu
//! and serves the HTTP and WebSocket API until Ctrl-C or SIGTERM.
//!
//! ```bash
//! RUST_LOG=info TRATTORIA_PORT=5000 cargo run -p trattoria
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use trattoria::config::Config;
use trattoria::http::{self, AppState};
use trattoria::lifecycle::RestaurantSystem;
use trattoria::notify::NotificationChannel;
use trattoria_actors::tracing::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::load()?;
    info!(?config, "Starting trattoria");

    let system = RestaurantSystem::from_config(&config).await?;
    let notifier = Arc::new(NotificationChannel::new());
    let state = AppState::new(Arc::new(system.order_service(notifier)));

    let address = config.socket_addr();
    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;

    // The router and its state are dropped when `serve` returns, releasing the
    // service's client clones so the actors can stop.
    http::serve(listener, state, http::shutdown_signal()).await?;

    system.shutdown().await?;
    info!("Server shut down");
    Ok(())
}
