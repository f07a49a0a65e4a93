use super::{OrderService, ServiceError};
use crate::model::{CatalogItem, CatalogItemCreate, CatalogItemId, Category};
use crate::stats::{self, DailyStats};
use chrono::{DateTime, Local};
use tracing::{debug, error, info, instrument};
use trattoria_actors::ActorClient;

impl OrderService {
    /// Menu items in id order. An unknown category matches nothing.
    #[instrument(skip(self))]
    pub async fn list_catalog(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<CatalogItem>, ServiceError> {
        let category = match category {
            None => None,
            Some(raw) => match raw.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    debug!(error = %e, "Unknown category filter");
                    return Ok(Vec::new());
                }
            },
        };
        Ok(self.catalog.list_by_category(category).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_catalog_item(&self, id: CatalogItemId) -> Result<CatalogItem, ServiceError> {
        self.catalog
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Menu item not found".to_string()))
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_catalog_item(
        &self,
        params: CatalogItemCreate,
    ) -> Result<CatalogItem, ServiceError> {
        let id = self.catalog.create_item(params).await?;
        info!(%id, "Menu item added");
        self.get_catalog_item(id).await
    }

    /// Figures for orders placed on `as_of`'s day, up to `as_of`.
    #[instrument(skip(self))]
    pub async fn daily_stats(&self, as_of: DateTime<Local>) -> Result<DailyStats, ServiceError> {
        let orders = self.orders.list().await?;
        stats::summarize(&orders, as_of).map_err(|e| {
            error!(error = %e, "Daily stats overflowed");
            ServiceError::from(e)
        })
    }
}
