//! Bundles: composite products, their posted configuration and validation.

mod bundle;
mod configuration;
mod validation;

pub use bundle::{Bundle, BundledItem};
pub use configuration::{BundleConfiguration, BundledItemConfiguration};
pub use validation::validate_bundle_add_to_cart;
