//! Product price lookup: the form's one external collaborator.

use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Resolves a product reference to its current price.
///
/// A `None` return is a *lookup miss*: the product was deleted between the
/// options being loaded and the selection being made. The form recovers
/// locally by pricing the line at zero.
pub trait ProductLookup {
    fn price_of(&self, id: ProductId) -> Option<Decimal>;
}

/// A preloaded snapshot of the product catalog, taken once per editing
/// session so selections never round-trip to the product actor.
///
/// Built by [`ProductClient::product_options`](crate::clients::ProductClient::product_options).
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Snapshot the given products, ordered by name for display.
    pub fn new(mut products: Vec<Product>) -> Self {
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Self { products }
    }

    /// The select options offered to the user: id and display name.
    pub fn options(&self) -> impl Iterator<Item = (ProductId, &str)> {
        self.products.iter().map(|p| (p.id, p.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for ProductCatalog {
    fn price_of(&self, id: ProductId) -> Option<Decimal> {
        self.products.iter().find(|p| p.id == id).map(|p| p.price)
    }
}

/// Convenience impl for tests and callers that already hold a price map.
impl ProductLookup for HashMap<ProductId, Decimal> {
    fn price_of(&self, id: ProductId) -> Option<Decimal> {
        self.get(&id).copied()
    }
}
