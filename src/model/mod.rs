//! Pure domain types (DTOs) implementing the [`Entity`](crate::framework::Entity) trait.

pub mod catalog;
pub mod order;
pub mod product;
pub mod user;

pub use catalog::*;
pub use order::*;
pub use product::*;
pub use user::*;
