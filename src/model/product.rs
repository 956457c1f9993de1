//! The inventory record: a product name plus its available stock.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when mutating a product's stock.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// More units were requested than the product has in stock.
    /// The stock count is left untouched when this is returned.
    #[error("insufficient stock of product '{name}': requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },
}

/// A product in the inventory.
///
/// The `name` is the identity key: two products with the same name refer to
/// the same inventory record. Stock is a `u32`, so a negative count is
/// unrepresentable; [`Product::subtract_count`] is the only mutation and it
/// checks before it acts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    count: u32,
}

impl Product {
    /// Creates a new Product with an initial stock count.
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// The product's identity key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current available stock.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Decreases stock by `n`.
    ///
    /// Fails with [`ProductError::InsufficientStock`] when `n` exceeds the
    /// available count, applying no partial decrement.
    pub fn subtract_count(&mut self, n: u32) -> Result<(), ProductError> {
        if n > self.count {
            return Err(ProductError::InsufficientStock {
                name: self.name.clone(),
                requested: n,
                available: self.count,
            });
        }
        self.count -= n;
        Ok(())
    }
}
