//! # Mock Store
//!
//! Utilities for testing the shopping service in isolation.
//!
//! Use [`MockStore::new`] to get a store fake and hand [`MockStore::client`]
//! to the service under test. Every `save` the service issues is recorded and
//! can be inspected afterwards with [`MockStore::saved`]; `find_*` lookups
//! are answered from products seeded via [`MockStore::with_product`].

use crate::model::Product;
use crate::store::{InventoryClient, StoreError, StoreRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Shared, inspectable state behind the mock's background task.
#[derive(Default)]
struct MockState {
    records: HashMap<String, Product>,
    saved: Vec<Product>,
    fail_saves_with: Option<StoreError>,
}

/// A store fake with call recording.
///
/// # Testing Strategy
/// In service tests we don't want to spin up a full
/// [`InventoryActor`](crate::store::InventoryActor) if we are just testing
/// the *service* logic. Instead the mock answers the same [`StoreRequest`]
/// messages from a background task we control, records every persist call,
/// and lets the test assert on exactly what the service sent, including
/// that nothing was sent at all.
///
/// # Example
/// ```ignore
/// let mock = MockStore::new();
/// let service = ShoppingService::new(mock.client());
/// // ... drive the service ...
/// assert_eq!(mock.saved().len(), 2);
/// ```
pub struct MockStore {
    client: InventoryClient,
    state: Arc<Mutex<MockState>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockStore {
    /// Creates a mock store with no records and an empty call log.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let state = Arc::new(Mutex::new(MockState::default()));
        let state_clone = state.clone();

        // Background task answering store requests from the shared state.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = state_clone.lock().unwrap();
                match request {
                    StoreRequest::Save { product, respond_to } => {
                        let response = match state.fail_saves_with.clone() {
                            Some(err) => Err(err),
                            None => {
                                state.saved.push(product.clone());
                                state.records.insert(product.name().to_string(), product);
                                Ok(())
                            }
                        };
                        let _ = respond_to.send(response);
                    }
                    StoreRequest::FindAll { respond_to } => {
                        let all = state.records.values().cloned().collect();
                        let _ = respond_to.send(Ok(all));
                    }
                    StoreRequest::FindByName { name, respond_to } => {
                        let _ = respond_to.send(Ok(state.records.get(&name).cloned()));
                    }
                }
            }
        });

        Self {
            client: InventoryClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Seeds a product record for `find_all` / `find_by_name` lookups.
    pub fn with_product(self, product: Product) -> Self {
        self.seed(product);
        self
    }

    /// Overwrites a product record without touching the save log. Use this
    /// to model stock changes made behind the service's back.
    pub fn seed(&self, product: Product) {
        self.state
            .lock()
            .unwrap()
            .records
            .insert(product.name().to_string(), product);
    }

    /// Makes every subsequent `save` fail with the given error.
    pub fn fail_saves_with(&self, error: StoreError) {
        self.state.lock().unwrap().fail_saves_with = Some(error);
    }

    /// Returns a client for use by the code under test.
    pub fn client(&self) -> InventoryClient {
        self.client.clone()
    }

    /// Every product passed to `save`, in call order.
    pub fn saved(&self) -> Vec<Product> {
        self.state.lock().unwrap().saved.clone()
    }

    /// Number of `save` calls received for the named product.
    pub fn save_calls(&self, name: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .saved
            .iter()
            .filter(|p| p.name() == name)
            .count()
    }

    /// The product a given `save` left on record, if any.
    pub fn record(&self, name: &str) -> Option<Product> {
        self.state.lock().unwrap().records.get(name).cloned()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProductStore;

    #[tokio::test]
    async fn mock_records_saves_and_answers_lookups() {
        let mock = MockStore::new().with_product(Product::new("Widget", 5));
        let client = mock.client();

        let found = client.find_by_name("Widget").await.unwrap();
        assert_eq!(found, Some(Product::new("Widget", 5)));

        client.save(Product::new("Gadget", 2)).await.unwrap();
        assert_eq!(mock.saved(), vec![Product::new("Gadget", 2)]);
        assert_eq!(mock.save_calls("Gadget"), 1);
        assert_eq!(mock.save_calls("Widget"), 0);

        let all = client.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn mock_can_script_save_failures() {
        let mock = MockStore::new();
        mock.fail_saves_with(StoreError::Backend("disk full".to_string()));

        let err = mock
            .client()
            .save(Product::new("Widget", 1))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Backend("disk full".to_string()));
        assert!(mock.saved().is_empty());
    }
}
