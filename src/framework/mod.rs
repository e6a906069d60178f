//! The generic resource-actor engine.
//!
//! [`core`] holds the [`Entity`] trait, the [`ResourceActor`] message loop
//! and the [`ResourceClient`]; [`mock`] holds the expectation harness for
//! testing clients without spawning real actors.

pub mod core;
pub mod mock;

pub use self::core::{
    Entity, FrameworkError, ResourceActor, ResourceClient, ResourceRequest, Response,
};
