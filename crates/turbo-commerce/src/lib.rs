//! E-commerce domain types and logic for TurboCommerce.
//!
//! This crate provides the storefront side of the add-to-cart flow:
//!
//! - **Catalog**: Products, variations, inventory, bundle-sell links
//! - **Bundles**: Composite products, posted configuration, validation
//! - **Cart**: Keyed cart lines with metadata, confirmations, notices, sessions
//! - **Storefront**: The add-to-cart pipeline and its extension points
//!
//! # Example
//!
//! ```rust
//! use turbo_commerce::prelude::*;
//!
//! let catalog = Catalog::new().with(Product::new("tent", "Tent"));
//! let mut store = Storefront::new(
//!     StorefrontConfig::default(),
//!     catalog,
//!     MemorySessionStore::new(),
//!     "session-1",
//! );
//!
//! let form = FormData::new().with("add-to-cart", "tent");
//! let outcome = store.handle_add_to_cart_form(form).unwrap().unwrap();
//! assert_eq!(outcome.message, "“Tent” has been added to your cart.");
//! ```

pub mod error;
pub mod form;
pub mod ids;

pub mod bundle;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod storefront;

pub use config::{BundleFieldNames, StorefrontConfig};
pub use error::CommerceError;
pub use form::FormData;
pub use ids::*;
pub use storefront::{AddToCartOutcome, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{BundleFieldNames, StorefrontConfig};
    pub use crate::error::CommerceError;
    pub use crate::form::FormData;
    pub use crate::ids::*;
    pub use crate::storefront::{AddToCartOutcome, Storefront};

    // Catalog
    pub use crate::catalog::{
        BundleSellLink, Catalog, InventoryLevel, Product, ProductStatus, ProductType,
    };

    // Bundles
    pub use crate::bundle::{
        validate_bundle_add_to_cart, Bundle, BundleConfiguration, BundledItem,
        BundledItemConfiguration,
    };

    // Cart
    pub use crate::cart::{
        add_to_cart_message, AddToCartRequest, AddedContext, AddedItem, Cart, CartExtension,
        CartItem, CartItemData, DefaultMessageFormatter, MemorySessionStore, MessageContext,
        MessageFormatter, MessageGuard, MessageRenderer, Notices, ProductQuantities, SessionStore,
        ValidationContext, VariationAttributes,
    };
}
