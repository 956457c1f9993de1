use shopfront::lifecycle::ShopSystem;
use shopfront::model::{Customer, Product};
use shopfront::shopping::BuyError;
use shopfront::store::ProductStore;

/// Full end-to-end test with the real inventory actor.
#[tokio::test]
async fn test_full_checkout_flow() {
    let system = ShopSystem::new();
    let customer = Customer::new(1, "79876543210");

    // Stock the inventory
    system
        .inventory
        .save(Product::new("Super Widget", 3))
        .await
        .expect("Failed to stock Super Widget");
    system
        .inventory
        .save(Product::new("Basic Gadget", 2))
        .await
        .expect("Failed to stock Basic Gadget");

    // Fill the cart from the catalog
    let widget = system
        .shopping
        .product_by_name("Super Widget")
        .await
        .expect("Failed to look up product")
        .expect("Product not found");
    let gadget = system
        .shopping
        .product_by_name("Basic Gadget")
        .await
        .expect("Failed to look up product")
        .expect("Product not found");

    system
        .shopping
        .add_to_cart(&customer, widget, 2)
        .await
        .expect("Failed to add to cart");
    system
        .shopping
        .add_to_cart(&customer, gadget, 1)
        .await
        .expect("Failed to add to cart");

    // Check out
    let purchased = system
        .shopping
        .checkout(&customer)
        .await
        .expect("Checkout failed");
    assert!(purchased);

    // The store now carries the decremented counts
    let widget = system
        .shopping
        .product_by_name("Super Widget")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(widget.count(), 1, "stock should be decremented");
    let gadget = system
        .shopping
        .product_by_name("Basic Gadget")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(gadget.count(), 1, "stock should be decremented");

    // The cart was cleared, so a second checkout buys nothing
    assert!(system.shopping.cart_of(&customer).await.is_empty());
    let purchased_again = system
        .shopping
        .checkout(&customer)
        .await
        .expect("Checkout failed");
    assert!(!purchased_again, "an emptied cart has nothing to buy");

    system.shutdown().await.expect("Failed to shutdown shop");
}

/// An unsatisfiable cart aborts the whole purchase and leaves the store alone.
#[tokio::test]
async fn test_insufficient_stock_leaves_inventory_unchanged() {
    let system = ShopSystem::new();
    let customer = Customer::new(2, "79001112233");

    system
        .inventory
        .save(Product::new("Limited Widget", 1))
        .await
        .expect("Failed to stock Limited Widget");

    let widget = system
        .shopping
        .product_by_name("Limited Widget")
        .await
        .unwrap()
        .unwrap();
    system
        .shopping
        .add_to_cart(&customer, widget, 2)
        .await
        .expect("Failed to add to cart");

    let err = system.shopping.checkout(&customer).await.unwrap_err();
    assert_eq!(
        err,
        BuyError::InsufficientStock("Limited Widget".to_string())
    );

    // Inventory untouched, cart retained for another attempt
    let widget = system
        .shopping
        .product_by_name("Limited Widget")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(widget.count(), 1, "stock should not change on failed checkout");
    assert_eq!(system.shopping.cart_of(&customer).await.len(), 1);

    system.shutdown().await.expect("Failed to shutdown shop");
}

/// Each customer gets their own session cart.
#[tokio::test]
async fn test_carts_are_scoped_per_customer() {
    let system = ShopSystem::new();
    let alice = Customer::new(1, "79876543210");
    let bob = Customer::new(2, "79001112233");

    system
        .inventory
        .save(Product::new("Shared Widget", 10))
        .await
        .unwrap();
    let widget = system
        .shopping
        .product_by_name("Shared Widget")
        .await
        .unwrap()
        .unwrap();

    system
        .shopping
        .add_to_cart(&alice, widget.clone(), 4)
        .await
        .unwrap();
    system
        .shopping
        .add_to_cart(&bob, widget, 1)
        .await
        .unwrap();

    // Alice's checkout consumes only Alice's cart
    assert!(system.shopping.checkout(&alice).await.unwrap());
    assert!(system.shopping.cart_of(&alice).await.is_empty());
    assert_eq!(system.shopping.cart_of(&bob).await.len(), 1);

    let widget = system
        .shopping
        .product_by_name("Shared Widget")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(widget.count(), 6);

    // Bob's cart still holds the snapshot taken at 10 units, but his
    // checkout must commit against the live record Alice already reduced.
    assert!(system.shopping.checkout(&bob).await.unwrap());
    let widget = system
        .shopping
        .product_by_name("Shared Widget")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        widget.count(),
        5,
        "both sales must be reflected in the store"
    );

    system.shutdown().await.unwrap();
}

/// Stock sold after a product went into the cart counts against the buyer.
#[tokio::test]
async fn test_stock_shrinking_after_add_fails_checkout() {
    let system = ShopSystem::new();
    let customer = Customer::new(3, "79005556677");

    system
        .inventory
        .save(Product::new("Scarce Widget", 3))
        .await
        .unwrap();
    let widget = system
        .shopping
        .product_by_name("Scarce Widget")
        .await
        .unwrap()
        .unwrap();
    system
        .shopping
        .add_to_cart(&customer, widget, 3)
        .await
        .unwrap();

    // The inventory drops to 2 behind the cart's back
    system
        .inventory
        .save(Product::new("Scarce Widget", 2))
        .await
        .unwrap();

    let err = system.shopping.checkout(&customer).await.unwrap_err();
    assert_eq!(
        err,
        BuyError::InsufficientStock("Scarce Widget".to_string())
    );

    let widget = system
        .shopping
        .product_by_name("Scarce Widget")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(widget.count(), 2, "live stock untouched by the failed buy");
    assert_eq!(system.shopping.cart_of(&customer).await.len(), 1);

    system.shutdown().await.unwrap();
}
