//! Pure data structures of the shop: products, customers, and carts.

pub mod cart;
pub mod customer;
pub mod product;

pub use cart::*;
pub use customer::*;
pub use product::*;
