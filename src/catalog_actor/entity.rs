//! [`Entity`] implementations for [`Category`] and [`Brand`].

use crate::framework::Entity;
use crate::model::{
    Brand, BrandId, CatalogEntryCreate, CatalogEntryUpdate, Category, CategoryId,
};
use async_trait::async_trait;

#[async_trait]
impl Entity for Category {
    type Id = CategoryId;
    type CreateParams = CatalogEntryCreate;
    type UpdateParams = CatalogEntryUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: CategoryId, params: CatalogEntryCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            slug: params.slug,
            is_active: params.is_active,
        })
    }

    async fn on_update(&mut self, update: CatalogEntryUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}

#[async_trait]
impl Entity for Brand {
    type Id = BrandId;
    type CreateParams = CatalogEntryCreate;
    type UpdateParams = CatalogEntryUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: BrandId, params: CatalogEntryCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            slug: params.slug,
            is_active: params.is_active,
        })
    }

    async fn on_update(&mut self, update: CatalogEntryUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
