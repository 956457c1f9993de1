//! # Core Inventory Store
//!
//! This module defines the persistence boundary for product records.
//!
//! ## Key Types
//!
//! - [`ProductStore`]: The capability trait consumed by the shopping service.
//! - [`InventoryActor`]: The task that owns the product records.
//! - [`InventoryClient`]: The channel client for talking to the actor.
//! - [`StoreError`]: Common errors (e.g., StoreClosed, Backend).

use crate::model::Product;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE CAPABILITY TRAIT
// =============================================================================

/// Errors that can occur at the store boundary.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("inventory store closed")]
    StoreClosed,
    #[error("inventory store dropped response channel")]
    StoreDropped,
    #[error("inventory backend error: {0}")]
    Backend(String),
}

/// The injected persistence capability for product records.
///
/// # Architecture Note
/// The shopping service never talks to a concrete store. It is written
/// against this trait, so the production path (an [`InventoryClient`]
/// backed by a running [`InventoryActor`]) and the test path (a
/// [`MockStore`](crate::store::mock::MockStore)) are interchangeable.
///
/// `save` is an upsert keyed by product name: the saved record becomes the
/// store's current truth for that product. `find_all` and `find_by_name`
/// are pass-through read lookups.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists a product's current state, inserting or overwriting by name.
    async fn save(&self, product: Product) -> Result<(), StoreError>;

    /// Returns every product currently on record.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Looks up a single product by its name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError>;
}

// =============================================================================
// 2. THE MESSAGES
// =============================================================================

/// Type alias for the one-shot response channel used by the inventory actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request messages sent to the inventory actor.
///
/// The variants map 1:1 onto the [`ProductStore`] operations, so anything
/// that can answer these messages can stand in for the store; the mock in
/// [`mock`](crate::store::mock) does exactly that.
#[derive(Debug)]
pub enum StoreRequest {
    Save {
        product: Product,
        respond_to: Response<()>,
    },
    FindAll {
        respond_to: Response<Vec<Product>>,
    },
    FindByName {
        name: String,
        respond_to: Response<Option<Product>>,
    },
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// The task that owns the inventory records.
///
/// # Architecture Note
/// This struct is the "server" half of the store. It owns the product map
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so the record
/// map needs no `Mutex` or `RwLock`: exclusive ownership of state within
/// the task gives us safety for free.
pub struct InventoryActor {
    receiver: mpsc::Receiver<StoreRequest>,
    records: HashMap<String, Product>,
}

impl InventoryActor {
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
        };
        let client = InventoryClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing messages until the channel
    /// closes.
    pub async fn run(mut self) {
        info!("Inventory store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { product, respond_to } => {
                    debug!(?product, "Save");
                    let name = product.name().to_string();
                    self.records.insert(name.clone(), product);
                    info!(%name, size = self.records.len(), "Saved");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::FindAll { respond_to } => {
                    debug!(size = self.records.len(), "FindAll");
                    let _ = respond_to.send(Ok(self.records.values().cloned().collect()));
                }
                StoreRequest::FindByName { name, respond_to } => {
                    let record = self.records.get(&name).cloned();
                    debug!(%name, found = record.is_some(), "FindByName");
                    let _ = respond_to.send(Ok(record));
                }
            }
        }

        info!(size = self.records.len(), "Inventory store shutdown");
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A channel client for the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl ProductStore for InventoryClient {
    async fn save(&self, product: Product) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Save {
                product,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FindAll { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FindByName {
                name: name.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_round_trips_through_the_actor() {
        let (actor, client) = InventoryActor::new(10);
        let handle = tokio::spawn(actor.run());

        // 1. Save two products
        client.save(Product::new("Widget", 5)).await.unwrap();
        client.save(Product::new("Gadget", 2)).await.unwrap();

        // 2. Point lookup
        let widget = client.find_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(widget.count(), 5);
        assert_eq!(client.find_by_name("Nothing").await.unwrap(), None);

        // 3. Save is an upsert: a second save overwrites the record
        client.save(Product::new("Widget", 3)).await.unwrap();
        let widget = client.find_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(widget.count(), 3);

        // 4. Listing sees both records
        let all = client.find_all().await.unwrap();
        assert_eq!(all.len(), 2);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn client_reports_a_closed_store() {
        let (actor, client) = InventoryActor::new(10);
        drop(actor);

        let err = client.save(Product::new("Widget", 1)).await.unwrap_err();
        assert_eq!(err, StoreError::StoreClosed);
    }
}
