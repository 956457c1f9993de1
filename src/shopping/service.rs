//! The checkout orchestrator.

use crate::model::{Cart, CartError, Customer, CustomerId, Product};
use crate::shopping::BuyError;
use crate::store::{ProductStore, StoreError};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Validates and commits carts against the inventory store.
///
/// # Architecture Note
/// The service is generic over [`ProductStore`], so production code runs it
/// against an [`InventoryClient`](crate::store::InventoryClient) while tests
/// substitute a [`MockStore`](crate::store::mock::MockStore) client. The
/// store is the only dependency.
///
/// The service also owns the session carts: one cart per customer, created
/// on first access and retained until the process ends. (Handing out a fresh
/// cart on every lookup would silently discard line items.)
pub struct ShoppingService<S: ProductStore> {
    store: S,
    carts: Mutex<HashMap<CustomerId, Cart>>,
}

impl<S: ProductStore> ShoppingService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            carts: Mutex::new(HashMap::new()),
        }
    }

    /// Purchases the contents of `cart` against the inventory.
    ///
    /// # Contract
    /// - `None` or an empty cart: returns `Ok(false)` with no store
    ///   interaction and no side effect.
    /// - Every line item is checked against the store's *live* record for
    ///   that product; the cart's snapshot only identifies the product, it
    ///   never supplies the count. A product the store has no record of
    ///   yields [`BuyError::UnknownProduct`]; a quantity exceeding the live
    ///   stock yields [`BuyError::InsufficientStock`] naming that product,
    ///   with **no** stock mutated and **no** persist call issued
    ///   (all-or-nothing).
    /// - Otherwise: every line item's quantity is subtracted from the live
    ///   record's stock, each distinct product is persisted exactly once,
    ///   the cart is cleared, and `Ok(true)` is returned.
    ///
    /// Validation is a dry-run pass over all line items before the commit
    /// pass touches anything, which is what makes the abort path free of
    /// partial mutation. Store failures propagate uninterpreted as
    /// [`BuyError::Store`].
    #[instrument(skip(self, cart))]
    pub async fn buy(&self, cart: Option<&mut Cart>) -> Result<bool, BuyError> {
        let Some(cart) = cart else {
            debug!("No cart supplied, nothing to buy");
            return Ok(false);
        };
        if cart.is_empty() {
            debug!(customer = %cart.customer().id, "Cart is empty, nothing to buy");
            return Ok(false);
        }

        // Validation pass: a dry run over every line item, against the
        // store's current records. No mutation happens until the whole cart
        // is known to be satisfiable.
        let mut checked = Vec::with_capacity(cart.len());
        for item in cart.items() {
            let name = item.product.name();
            let record = self
                .store
                .find_by_name(name)
                .await?
                .ok_or_else(|| BuyError::UnknownProduct(name.to_string()))?;
            if item.quantity > record.count() {
                warn!(
                    product = name,
                    requested = item.quantity,
                    available = record.count(),
                    "Insufficient stock, aborting purchase"
                );
                return Err(BuyError::InsufficientStock(name.to_string()));
            }
            checked.push((record, item.quantity));
        }

        // Commit pass: decrement the live record and persist each distinct
        // product once.
        for (mut record, quantity) in checked {
            record.subtract_count(quantity)?;
            self.store.save(record).await?;
        }

        info!(
            customer = %cart.customer().id,
            line_items = cart.len(),
            "Purchase committed"
        );
        cart.clear();
        Ok(true)
    }

    /// Adds `quantity` units of `product` to the customer's session cart,
    /// creating the cart on first access.
    #[instrument(skip(self, product), fields(customer = %customer.id))]
    pub async fn add_to_cart(
        &self,
        customer: &Customer,
        product: Product,
        quantity: u32,
    ) -> Result<(), CartError> {
        debug!(product = product.name(), quantity, "Adding to cart");
        let mut carts = self.carts.lock().await;
        carts
            .entry(customer.id)
            .or_insert_with(|| Cart::new(customer.clone()))
            .add(product, quantity)
    }

    /// Snapshot of the customer's session cart (empty if none exists yet).
    pub async fn cart_of(&self, customer: &Customer) -> Cart {
        let carts = self.carts.lock().await;
        carts
            .get(&customer.id)
            .cloned()
            .unwrap_or_else(|| Cart::new(customer.clone()))
    }

    /// Purchases the customer's session cart.
    ///
    /// A customer that never touched a cart follows the "nothing to buy"
    /// branch of [`ShoppingService::buy`] and gets `Ok(false)`.
    #[instrument(skip(self), fields(customer = %customer.id))]
    pub async fn checkout(&self, customer: &Customer) -> Result<bool, BuyError> {
        let mut carts = self.carts.lock().await;
        self.buy(carts.get_mut(&customer.id)).await
    }

    /// Lists every product on record. Pass-through to the store.
    pub async fn all_products(&self) -> Result<Vec<Product>, StoreError> {
        self.store.find_all().await
    }

    /// Looks a product up by name. Pass-through to the store.
    pub async fn product_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        self.store.find_by_name(name).await
    }
}
