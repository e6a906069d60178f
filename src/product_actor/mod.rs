//! # Product Actor
//!
//! Manages the product catalog. Besides CRUD, the actor is listed by
//! [`ProductClient::product_options`](crate::clients::ProductClient::product_options)
//! to preload the selections an order form offers.
//!
//! - [`entity`] — [`Entity`](crate::framework::Entity) implementation for
//!   [`Product`](crate::model::Product)
//! - [`error`] — [`ProductError`]
//! - [`new()`] — factory creating the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::{Product, ProductId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let counter = Arc::new(AtomicU32::new(1));
    let next_product_id = move || ProductId(counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(32, next_product_id);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
