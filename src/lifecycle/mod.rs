//! Orchestration: actor startup, dependency wiring and shutdown, plus the
//! tracing setup shared by the binary and the tests.

pub mod store_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use store_system::StoreSystem;
