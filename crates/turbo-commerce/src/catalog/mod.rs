//! Product catalog module.
//!
//! Contains types for products, variations, inventory and bundle-sell links.

mod inventory;
mod product;
mod store;

pub use inventory::InventoryLevel;
pub use product::{BundleSellLink, Product, ProductStatus, ProductType};
pub use store::Catalog;
