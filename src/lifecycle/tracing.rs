//! # Observability & Tracing
//!
//! This module provides the tracing setup for the whole shop.
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! The compact format hides the crate/module prefix (`with_target(false)`),
//! which keeps log lines short while still carrying structured fields.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: inventory actor startup, shutdown, and final size
//! - **Store Operations**: `Save`, `FindAll`, `FindByName`
//! - **Checkout Flow**: spans on the service entry points (`buy`,
//!   `add_to_cart`, `checkout`) plus the abort/commit decision points
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads (products, requests) at function entry
//! RUST_LOG=debug cargo run
//!
//! # Filter to the store only
//! RUST_LOG=shopfront::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a successful checkout looks like:
//!
//! ```text
//! INFO Inventory store started
//! INFO Saved name="Widget" size=1
//! INFO Purchase committed customer=customer_1 line_items=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the messages carry their own context
        .compact() // Compact format shows spans inline (e.g., "checkout:buy")
        .init();
}
