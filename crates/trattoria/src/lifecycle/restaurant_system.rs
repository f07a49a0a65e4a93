use crate::catalog_actor::{self, CatalogError};
use crate::clients::{CatalogClient, LineItemClient, OrderClient};
use crate::config::Config;
use crate::line_item_actor;
use crate::model::CatalogItemId;
use crate::notify::NotificationChannel;
use crate::order_actor::{self, TransitionPolicy};
use crate::seed::sample_menu;
use crate::service::OrderService;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running record stores of the restaurant.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the catalog, order and line-item actors
/// - **Dependency Wiring**: the line-item actor checks references through a catalog client
/// - **Seeding**: loading the sample menu into an empty catalog
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(32, TransitionPolicy::Permissive);
/// system.seed_catalog().await?;
///
/// let service = system.order_service(Arc::new(NotificationChannel::new()));
/// // ... serve requests, then drop the service ...
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    pub line_item_client: LineItemClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawn the three actors. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize, policy: TransitionPolicy) -> Self {
        // 1. Create actors (no dependencies)
        let (catalog_actor, catalog) = catalog_actor::new(buffer_size);
        let (order_actor, orders) = order_actor::new(buffer_size);
        let (line_item_actor, line_items) = line_item_actor::new(buffer_size);

        let catalog_client = CatalogClient::new(catalog);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(policy));
        let line_item_handle = tokio::spawn(line_item_actor.run(catalog_client.clone()));

        info!(?policy, buffer_size, "Record stores started");

        Self {
            catalog_client,
            order_client: OrderClient::new(orders),
            line_item_client: LineItemClient::new(line_items),
            handles: vec![catalog_handle, order_handle, line_item_handle],
        }
    }

    /// Start the actors as configured and seed the menu when enabled.
    pub async fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let system = Self::new(config.actor_buffer, config.transition_policy());
        if config.seed_catalog {
            system.seed_catalog().await?;
        }
        Ok(system)
    }

    /// Insert the sample menu. On a fresh store the items get ids 1 to 8.
    pub async fn seed_catalog(&self) -> Result<Vec<CatalogItemId>, CatalogError> {
        let mut ids = Vec::new();
        for item in sample_menu() {
            ids.push(self.catalog_client.create_item(item).await?);
        }
        info!(items = ids.len(), "Catalog seeded");
        Ok(ids)
    }

    /// An order service over clones of this system's clients.
    pub fn order_service(&self, notifier: Arc<NotificationChannel>) -> OrderService {
        OrderService::new(
            self.catalog_client.clone(),
            self.order_client.clone(),
            self.line_item_client.clone(),
            notifier,
        )
    }

    /// Gracefully shuts down the record stores.
    ///
    /// Drops this system's clients and waits for every actor task. Returns the first
    /// task failure (a panicked actor), after all tasks have been joined.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down record stores...");

        drop(self.catalog_client);
        drop(self.order_client);
        drop(self.line_item_client);

        let mut result = Ok(());
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }

        info!("Record stores stopped");
        result
    }
}
