//! Category and Brand: the two classification resources products hang off.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

/// Type-safe identifier for Brands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(pub u32);

impl From<u32> for BrandId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "brand_{}", self.0)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

/// A product brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

/// Payload for creating a category or a brand.
#[derive(Debug, Clone)]
pub struct CatalogEntryCreate {
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

impl CatalogEntryCreate {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            is_active: true,
        }
    }
}

/// Payload for updating a category or a brand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEntryUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub is_active: Option<bool>,
}
