//! Shopping-specific logic: the checkout service and its errors.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
