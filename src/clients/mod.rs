//! Type-safe domain clients wrapping the generic
//! [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The rest of the application never touches raw message passing; each
//! resource gets a small client with domain-named methods, inheriting
//! standard CRUD from the [`ActorClient`] trait.

pub mod actor_client;
pub mod catalog_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use actor_client::ActorClient;
pub use catalog_client::{BrandClient, CategoryClient};
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
