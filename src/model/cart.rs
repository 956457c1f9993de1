//! The per-customer cart: product snapshots paired with requested quantities.

use crate::model::{Customer, Product};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when building up a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A line item must request at least one unit.
    #[error("cannot add zero units of product '{0}' to the cart")]
    ZeroQuantity(String),
}

/// One cart entry: a product snapshot and the quantity requested of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

/// A customer's cart.
///
/// Line items are keyed by product name, so adding the same product twice
/// merges into one entry with the summed quantity. Availability is *not*
/// checked here: stock is only consulted at purchase time, by
/// [`ShoppingService::buy`](crate::shopping::ShoppingService::buy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    customer: Customer,
    items: HashMap<String, LineItem>,
}

impl Cart {
    /// Creates an empty cart for the given customer.
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            items: HashMap::new(),
        }
    }

    /// The customer this cart belongs to.
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Adds `quantity` units of `product` to the cart.
    ///
    /// If the product is already present its quantity is increased; the
    /// product snapshot stored on first add is kept (identity is the name).
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity(product.name().to_string()));
        }
        self.items
            .entry(product.name().to_string())
            .and_modify(|item| item.quantity += quantity)
            .or_insert(LineItem { product, quantity });
        Ok(())
    }

    /// Read view over the line items. Iteration order is not significant.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the cart. Invoked by the shopping service once a purchase
    /// has been committed.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
