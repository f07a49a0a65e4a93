//! # Catalog Client
//!
//! Provides a high-level API for interacting with the `CatalogItem` actor.
use super::recover_entity_error;
use crate::catalog_actor::CatalogError;
use crate::model::{CatalogItem, CatalogItemCreate, CatalogItemId, Category};
use async_trait::async_trait;
use tracing::{debug, instrument};
use trattoria_actors::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<CatalogItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<CatalogItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_item(
        &self,
        params: CatalogItemCreate,
    ) -> Result<CatalogItemId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Menu items in id order, optionally restricted to one category.
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let mut items = self.list().await?;
        if let Some(category) = category {
            items.retain(|i| i.category == category);
        }
        Ok(items)
    }
}

#[async_trait]
impl ActorClient<CatalogItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<CatalogItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_entity_error(e, CatalogError::NotFound)
    }
}
