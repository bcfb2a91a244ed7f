//! # Bundle-sells
//!
//! Lets a product offer a list of other products ("bundle-sells") that the
//! shopper can add in the same add-to-cart submission. Chosen bundle-sells
//! are added as their own cart lines, linked to the line of the product
//! they were offered with, and named in the confirmation message.
//!
//! ```
//! use bundle_sells::{BundleSells, BundleSellsConfig};
//! use turbo_commerce::prelude::*;
//!
//! let catalog = Catalog::new()
//!     .with(Product::new("tent", "Tent").with_bundle_sell(BundleSellLink::new("pegs")))
//!     .with(Product::new("pegs", "Pegs"));
//! let mut store = Storefront::new(
//!     StorefrontConfig::default(),
//!     catalog,
//!     MemorySessionStore::new(),
//!     "session-1",
//! );
//! BundleSells::register(&mut store, BundleSellsConfig::default()).unwrap();
//!
//! let form = FormData::new().with("add-to-cart", "tent");
//! let outcome = store.handle_add_to_cart_form(form).unwrap().unwrap();
//!
//! assert_eq!(store.cart().unique_item_count(), 2);
//! assert_eq!(outcome.message, "“Tent” and “Pegs” have been added to your cart.");
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod extension;
pub mod message;
pub mod resolver;
pub mod selection;
pub mod version;

pub use cart::{bundle_sell_of, bundle_sells, BUNDLE_SELLS, BUNDLE_SELL_OF};
pub use config::BundleSellsConfig;
pub use error::BundleSellsError;
pub use extension::BundleSells;
pub use resolver::{resolve, BundleSellEntry, BundleSellsConfiguration};
pub use selection::ProductSelection;
