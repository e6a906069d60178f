//! [`Entity`] implementation for [`User`].

use crate::framework::Entity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;

#[async_trait]
impl Entity for User {
    type Id = UserId;
    type CreateParams = UserCreate;
    type UpdateParams = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, String> {
        if params.email.trim().is_empty() {
            return Err("email must not be empty".to_string());
        }
        Ok(Self::new(id, params.name, params.email))
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
