//! Orchestration: wiring the inventory actor to the shopping service.

pub mod shop_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use shop_system::*;
