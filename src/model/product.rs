use crate::model::{BrandId, CategoryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product in the store catalog.
///
/// `price` is the *current* price; order line items copy it at selection
/// time and are not affected by later price changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<CategoryId>,
    pub brand_id: Option<BrandId>,
    pub is_active: bool,
    pub is_featured: bool,
    pub in_stock: bool,
    pub on_sale: bool,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<CategoryId>,
    pub brand_id: Option<BrandId>,
    pub is_active: bool,
    pub is_featured: bool,
    pub in_stock: bool,
    pub on_sale: bool,
}

impl ProductCreate {
    /// A minimal active product with everything else defaulted.
    pub fn basic(name: impl Into<String>, slug: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            price,
            category_id: None,
            brand_id: None,
            is_active: true,
            is_featured: false,
            in_stock: true,
            on_sale: false,
        }
    }
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<CategoryId>,
    pub brand_id: Option<BrandId>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub in_stock: Option<bool>,
    pub on_sale: Option<bool>,
}
