//! High-level APIs for the Category and Brand actors.

use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    Brand, BrandId, CatalogEntryCreate, CatalogEntryUpdate, Category, CategoryId,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        params: CatalogEntryCreate,
    ) -> Result<CategoryId, CatalogError> {
        debug!(?params, "create_category called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        update: CatalogEntryUpdate,
    ) -> Result<Category, CatalogError> {
        debug!(?update, "update_category called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::ActorCommunicationError(e.to_string())
    }
}

/// Client for interacting with the Brand actor.
#[derive(Clone)]
pub struct BrandClient {
    inner: ResourceClient<Brand>,
}

impl BrandClient {
    pub fn new(inner: ResourceClient<Brand>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_brand(&self, params: CatalogEntryCreate) -> Result<BrandId, CatalogError> {
        debug!(?params, "create_brand called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_brand(
        &self,
        id: BrandId,
        update: CatalogEntryUpdate,
    ) -> Result<Brand, CatalogError> {
        debug!(?update, "update_brand called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Brand> for BrandClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Brand> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::ActorCommunicationError(e.to_string())
    }
}
