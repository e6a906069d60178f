//! # Catalog Actors
//!
//! Category and Brand are the two classification resources products hang
//! off. Both are plain CRUD entities with no dependencies, so they share
//! this module, one error type and one pair of factory functions.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{BrandClient, CategoryClient};
use crate::framework::ResourceActor;
use crate::model::{Brand, BrandId, Category, CategoryId};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Category actor and its client.
pub fn new_category() -> (ResourceActor<Category>, CategoryClient) {
    let counter = Arc::new(AtomicU32::new(1));
    let next_category_id = move || CategoryId(counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(32, next_category_id);
    let client = CategoryClient::new(generic_client);

    (actor, client)
}

/// Creates a new Brand actor and its client.
pub fn new_brand() -> (ResourceActor<Brand>, BrandClient) {
    let counter = Arc::new(AtomicU32::new(1));
    let next_brand_id = move || BrandId(counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(32, next_brand_id);
    let client = BrandClient::new(generic_client);

    (actor, client)
}
