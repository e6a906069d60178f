//! [`Entity`] implementation for [`Product`].

use crate::framework::Entity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        if params.price < Decimal::ZERO {
            return Err(format!("price must not be negative: {}", params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            slug: params.slug,
            description: params.description,
            price: params.price,
            category_id: params.category_id,
            brand_id: params.brand_id,
            is_active: params.is_active,
            is_featured: params.is_featured,
            in_stock: params.in_stock,
            on_sale: params.on_sale,
        })
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(price) = update.price {
            if price < Decimal::ZERO {
                return Err(format!("price must not be negative: {}", price));
            }
            self.price = price;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.category_id.is_some() {
            self.category_id = update.category_id;
        }
        if update.brand_id.is_some() {
            self.brand_id = update.brand_id;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(is_featured) = update.is_featured {
            self.is_featured = is_featured;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(on_sale) = update.on_sale {
            self.on_sale = on_sale;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
