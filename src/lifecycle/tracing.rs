//! # Observability & Tracing
//!
//! Structured logging for the whole system, driven by the `RUST_LOG`
//! environment variable:
//!
//! ```bash
//! # Compact operational logs
//! RUST_LOG=info cargo run
//!
//! # Full request payloads at client entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to the actor engine only
//! RUST_LOG=storefront_admin::framework=debug cargo run
//! ```
//!
//! The actor loop logs every operation with structured fields
//! (`entity_type`, the entity id, store size); clients log the full payload
//! once at entry with `debug!(?params, ...)`. The module path is hidden
//! (`with_target(false)`) since `entity_type` already identifies the actor.

/// Initialize the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
