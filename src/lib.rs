//! # Storefront Admin
//!
//! An in-memory administrative backend for a small storefront. Users,
//! Products, Categories, Brands and Orders are each managed by a resource
//! actor; order editing runs through a pure, synchronous [`order_form`]
//! component that keeps line-item totals and the order grand total
//! consistent on every field change.
//!
//! ## Module tour
//!
//! - [`framework`] — the generic engine: [`Entity`](framework::Entity),
//!   [`ResourceActor`](framework::ResourceActor) and
//!   [`ResourceClient`](framework::ResourceClient). One message loop, reused
//!   for every resource type.
//! - [`model`] — pure domain types with newtype IDs and Create/Update DTOs.
//! - [`order_form`] — the order-editing core: reactive line-item totals,
//!   sibling-product uniqueness, save-time validation.
//! - [`user_actor`], [`product_actor`], [`catalog_actor`], [`order_actor`] —
//!   concrete [`Entity`](framework::Entity) implementations.
//! - [`clients`] — type-safe wrappers hiding the message passing
//!   ([`UserClient`](clients::UserClient), [`OrderClient`](clients::OrderClient), ...).
//! - [`lifecycle`] — [`StoreSystem`](lifecycle::StoreSystem) orchestration
//!   and tracing setup.
//!
//! ## Concurrency model
//!
//! Each actor runs in its own Tokio task and processes its mailbox
//! sequentially, so no locks guard actor state. The order form itself is
//! single-session and synchronous: every mutation leaves both the affected
//! line and the grand total consistent before it returns.
//!
//! ## Running the demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_form;
pub mod product_actor;
pub mod user_actor;
