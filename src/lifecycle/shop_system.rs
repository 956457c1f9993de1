use crate::shopping::ShoppingService;
use crate::store::{InventoryActor, InventoryClient};
use tracing::{error, info};

/// The runtime orchestrator for the shop.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the inventory actor
/// - **Dependency Wiring**: handing the store client to the shopping service
///
/// # Architecture
///
/// One inventory actor owns the product records and processes store requests
/// sequentially; the [`ShoppingService`] holds a client to it and the
/// per-customer session carts.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new();
///
/// system.inventory.save(Product::new("Widget", 10)).await?;
/// system.shopping.add_to_cart(&customer, widget, 2).await?;
/// let purchased = system.shopping.checkout(&customer).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    /// The checkout service, wired to the running inventory actor.
    pub shopping: ShoppingService<InventoryClient>,

    /// Direct store client, used to stock the inventory.
    pub inventory: InventoryClient,

    /// Task handle for the running inventory actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    /// Creates a new `ShopSystem` with the inventory actor running.
    pub fn new() -> Self {
        let (actor, inventory) = InventoryActor::new(32);
        let handle = tokio::spawn(actor.run());

        let shopping = ShoppingService::new(inventory.clone());

        Self {
            shopping,
            inventory,
            handle,
        }
    }

    /// Gracefully shuts the shop down.
    ///
    /// Drops the store clients, which closes the inventory actor's channel;
    /// the actor drains its queue and exits its loop. Returns an error if
    /// the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop...");

        // Dropping the service and the direct client closes the last
        // senders; the actor's receiver then returns None.
        drop(self.shopping);
        drop(self.inventory);

        if let Err(e) = self.handle.await {
            error!("Inventory actor task failed: {:?}", e);
            return Err(format!("Inventory actor task failed: {:?}", e));
        }

        info!("Shop shutdown complete.");
        Ok(())
    }
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}
