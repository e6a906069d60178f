//! # User Actor
//!
//! Manages customer records with plain CRUD; no dependencies, no custom
//! actions (`Context = ()`).
//!
//! - [`entity`] — [`Entity`](crate::framework::Entity) implementation for
//!   [`User`](crate::model::User)
//! - [`error`] — [`UserError`]
//! - [`new()`] — factory creating the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::{User, UserId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new User actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let counter = Arc::new(AtomicU32::new(1));
    let next_user_id = move || UserId(counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(32, next_user_id);
    let client = UserClient::new(generic_client);

    (actor, client)
}
