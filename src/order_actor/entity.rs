//! [`Entity`] implementation for [`Order`].

use crate::clients::{ActorClient, UserClient};
use crate::framework::Entity;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use async_trait::async_trait;

#[async_trait]
impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type UpdateParams = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = UserClient;

    /// Builds the order, recomputing `grand_total` from the items so a
    /// stale denormalized value can never be stored.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, String> {
        Ok(Self::new(id, params))
    }

    /// Rejects orders whose customer no longer exists.
    async fn on_create(&mut self, users: &UserClient) -> Result<(), String> {
        match users.get(self.user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(format!("unknown customer: {}", self.user_id)),
            Err(e) => Err(format!("customer lookup failed: {}", e)),
        }
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &UserClient) -> Result<(), String> {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(payment_status) = update.payment_status {
            self.payment_status = payment_status;
        }
        if update.notes.is_some() {
            self.notes = update.notes;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &UserClient) -> Result<(), String> {
        Ok(())
    }
}
