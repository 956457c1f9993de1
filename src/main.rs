//! Demo binary: stock the inventory, fill a cart, and check out.

use shopfront::lifecycle::{setup_tracing, ShopSystem};
use shopfront::model::{Customer, Product};
use shopfront::store::ProductStore;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting shop");

    let system = ShopSystem::new();
    let customer = Customer::new(1, "79876543210");

    // Stock the inventory
    let span = tracing::info_span!("stocking");
    async {
        info!("Stocking inventory");
        system
            .inventory
            .save(Product::new("Widget", 3))
            .await
            .map_err(|e| e.to_string())?;
        system
            .inventory
            .save(Product::new("Gadget", 2))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Fill the customer's cart
    let widget = system
        .shopping
        .product_by_name("Widget")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("Widget missing from inventory")?;
    let gadget = system
        .shopping
        .product_by_name("Gadget")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("Gadget missing from inventory")?;

    system
        .shopping
        .add_to_cart(&customer, widget, 2)
        .await
        .map_err(|e| e.to_string())?;
    system
        .shopping
        .add_to_cart(&customer, gadget, 1)
        .await
        .map_err(|e| e.to_string())?;

    // Check out
    let span = tracing::info_span!("checkout");
    let result = async {
        info!("Checking out");
        system.shopping.checkout(&customer).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(purchased) => info!(purchased, "Checkout finished"),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    // A second checkout finds the cart empty and buys nothing
    let purchased_again = system
        .shopping
        .checkout(&customer)
        .await
        .map_err(|e| e.to_string())?;
    info!(purchased = purchased_again, "Second checkout (empty cart)");

    for product in system.shopping.all_products().await.map_err(|e| e.to_string())? {
        info!(name = product.name(), stock = product.count(), "Remaining stock");
    }

    system.shutdown().await?;

    info!("Shop closed");
    Ok(())
}
