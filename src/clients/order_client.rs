//! High-level API for the Order actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use crate::order_form::OrderForm;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Customer existence is checked in the Order actor's `on_create` hook;
/// this client owns the step before that: save-time validation of the
/// editing session.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Validate a finished editing session and persist it as a new order.
    ///
    /// A form failing validation is rejected with
    /// [`OrderError::Validation`] before anything is sent to the actor.
    #[instrument(skip(self, form))]
    pub async fn save_order(&self, form: OrderForm) -> Result<OrderId, OrderError> {
        debug!(?form, "save_order called");
        let params = form.into_create()?;
        info!("Sending create order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        id: OrderId,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        debug!(?update, "update_order called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{PaymentMethod, ProductId, UserId};
    use crate::order_form::FormError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn priced(entries: &[(u32, Decimal)]) -> HashMap<ProductId, Decimal> {
        entries.iter().map(|&(id, p)| (ProductId(id), p)).collect()
    }

    #[tokio::test]
    async fn save_order_rejects_an_invalid_form_without_touching_the_actor() {
        let mut mock = MockClient::<Order>::new();
        let client = OrderClient::new(mock.client());

        // No customer, no payment method: validation fails client-side,
        // so no Create expectation is queued and none is consumed.
        let err = client.save_order(OrderForm::new()).await.unwrap_err();
        assert_eq!(err, OrderError::Validation(FormError::MissingCustomer));
        mock.verify();
    }

    #[tokio::test]
    async fn save_order_sends_a_validated_form_to_the_actor() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId(1));
        let client = OrderClient::new(mock.client());

        let lookup = priced(&[(1, dec!(10.00))]);
        let mut form = OrderForm::new();
        form.set_customer(Some(UserId(7)));
        form.set_payment_method(Some(PaymentMethod::Stripe));
        let line = form.push_line();
        form.select_product(line, Some(ProductId(1)), &lookup).unwrap();
        form.set_quantity(line, 3).unwrap();

        let id = client.save_order(form).await.unwrap();
        assert_eq!(id, OrderId(1));
        mock.verify();
    }
}
