//! The inventory-store boundary.
//!
//! This module provides the persistence seam for product records.
//!
//! # Main Components
//!
//! - [`ProductStore`] - Capability trait the shopping service is written against
//! - [`InventoryActor`] - Message-processing task that owns the product records
//! - [`InventoryClient`] - Channel client implementing [`ProductStore`]
//! - [`StoreError`] - Store plumbing errors
//!
//! # Testing
//!
//! See [`mock`] for a store fake that records persist calls without running
//! a full inventory actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
