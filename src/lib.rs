//! # Shopfront
//!
//! > **A minimal shopping checkout core built on message-passing state.**
//!
//! A customer accumulates product quantities in a cart and then purchases the
//! cart's contents against a shared product inventory. The interesting part is
//! the checkout: stock must never go negative, a purchase is all-or-nothing,
//! and the cart is cleared only when the whole purchase committed.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Pure structures with the local invariants baked in.
//! - **Role**: [`Product`](model::Product) guards its own stock count;
//!   [`Cart`](model::Cart) merges duplicate line items and rejects empty ones.
//!
//! ### 2. The Boundary ([`store`])
//! The persistence seam for product records.
//! - **Role**: The service is written against the
//!   [`ProductStore`](store::ProductStore) trait. In production that is an
//!   [`InventoryClient`](store::InventoryClient) talking to a running
//!   [`InventoryActor`](store::InventoryActor); in tests it is a
//!   [`MockStore`](store::mock::MockStore) that records every persist call.
//!
//! ### 3. The Core ([`shopping`])
//! The one non-trivial algorithm.
//! - **Role**: [`ShoppingService::buy`](shopping::ShoppingService::buy)
//!   validates a whole cart as a dry run before mutating anything, then
//!   decrements and persists each product exactly once and clears the cart.
//!   It also keeps the per-customer session carts.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: [`ShopSystem`](lifecycle::ShopSystem) spins up the inventory
//!   actor, wires the service, and shuts everything down gracefully.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! See [`store::mock`] for testing the service without a running actor.

pub mod lifecycle;
pub mod model;
pub mod shopping;
pub mod store;
