//! Error types for the shopping service.

use crate::model::ProductError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during checkout.
///
/// A `false` return from `buy` is reserved for "nothing to buy" (absent or
/// empty cart); a stock shortfall is always surfaced as an error, never as
/// `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuyError {
    /// At least one line item requests more units than the product has in
    /// stock. Raised before any stock is mutated or persisted.
    #[error("insufficient stock of product '{0}'")]
    InsufficientStock(String),

    /// A line item references a product the inventory has no record of.
    #[error("product '{0}' is not in the inventory")]
    UnknownProduct(String),

    /// The inventory store failed; propagated to the caller uninterpreted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ProductError> for BuyError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InsufficientStock { name, .. } => BuyError::InsufficientStock(name),
        }
    }
}
