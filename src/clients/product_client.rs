//! High-level API for the Product actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::order_form::ProductCatalog;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!(?params, "create_product called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!(?update, "update_product called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Preload the product options an order form offers, as a catalog
    /// snapshot that also answers the form's price lookups. Inactive
    /// products are not offered for new selections.
    #[instrument(skip(self))]
    pub async fn product_options(&self) -> Result<ProductCatalog, ProductError> {
        debug!("Loading product options");
        let products = self.inner.list().await.map_err(Self::map_error)?;
        Ok(ProductCatalog::new(
            products.into_iter().filter(|p| p.is_active).collect(),
        ))
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::order_form::ProductLookup;
    use rust_decimal_macros::dec;

    fn product(id: u32, name: &str, price: rust_decimal::Decimal, active: bool) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            price,
            category_id: None,
            brand_id: None,
            is_active: active,
            is_featured: false,
            in_stock: true,
            on_sale: false,
        }
    }

    #[tokio::test]
    async fn product_options_snapshot_answers_price_lookups() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![
            product(1, "Widget", dec!(10.00), true),
            product(2, "Gadget", dec!(5.50), true),
        ]);

        let client = ProductClient::new(mock.client());
        let catalog = client.product_options().await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price_of(ProductId(1)), Some(dec!(10.00)));
        assert_eq!(catalog.price_of(ProductId(9)), None);
        mock.verify();
    }

    #[tokio::test]
    async fn product_options_drop_inactive_products() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![
            product(1, "Widget", dec!(10.00), true),
            product(2, "Retired", dec!(1.00), false),
        ]);

        let client = ProductClient::new(mock.client());
        let catalog = client.product_options().await.unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_of(ProductId(2)), None);
        mock.verify();
    }

    #[tokio::test]
    async fn catalog_options_are_sorted_by_name() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![
            product(1, "Zipper", dec!(2.00), true),
            product(2, "Anvil", dec!(99.00), true),
        ]);

        let client = ProductClient::new(mock.client());
        let catalog = client.product_options().await.unwrap();

        let names: Vec<&str> = catalog.options().map(|(_, name)| name).collect();
        assert_eq!(names, ["Anvil", "Zipper"]);
        mock.verify();
    }
}
