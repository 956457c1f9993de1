//! Customer identity: just enough to key a cart.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u64);

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A customer of the shop.
///
/// The core consumes no customer behavior; the id keys the customer's cart
/// and the phone number is carried along as an opaque contact attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub phone: String,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(id: u64, phone: impl Into<String>) -> Self {
        Self {
            id: CustomerId(id),
            phone: phone.into(),
        }
    }
}
