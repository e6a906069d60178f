//! # Order Actor
//!
//! Persists orders produced by validated
//! [`OrderForm`](crate::order_form::OrderForm) sessions. The actor depends
//! on the User actor: `on_create` rejects orders whose customer does not
//! exist, so a stale customer selection cannot be saved.
//!
//! - [`entity`] — [`Entity`](crate::framework::Entity) implementation for
//!   [`Order`](crate::model::Order), `Context = UserClient`
//! - [`error`] — [`OrderError`]
//! - [`new()`] — factory creating the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Order, OrderId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Order actor and its client.
///
/// The actor's `UserClient` dependency is injected later, when the caller
/// starts the loop with `actor.run(user_client)`.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let counter = Arc::new(AtomicU32::new(1));
    let next_order_id = move || OrderId(counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(32, next_order_id);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
