//! Storefront configuration.

use crate::ids::BundledItemId;
use serde::{Deserialize, Serialize};

/// Settings for the add-to-cart flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Form field carrying the id of the product being added.
    #[serde(default = "default_add_to_cart_field")]
    pub add_to_cart_field: String,

    /// Names of the per-item bundle fields.
    #[serde(default)]
    pub bundle_fields: BundleFieldNames,

    /// Version of the bundles feature this storefront provides.
    #[serde(default = "default_bundles_version")]
    pub bundles_version: String,

    /// Prefix quantities (`2 × “Tent”`) in confirmation messages.
    #[serde(default = "default_true")]
    pub show_quantities: bool,
}

fn default_add_to_cart_field() -> String {
    "add-to-cart".to_string()
}

fn default_bundles_version() -> String {
    "6.0.0".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            add_to_cart_field: default_add_to_cart_field(),
            bundle_fields: BundleFieldNames::default(),
            bundles_version: default_bundles_version(),
            show_quantities: true,
        }
    }
}

/// Form field prefixes for bundled item choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleFieldNames {
    #[serde(default = "default_quantity_prefix")]
    pub quantity_prefix: String,
    #[serde(default = "default_selected_prefix")]
    pub selected_prefix: String,
}

fn default_quantity_prefix() -> String {
    "bundle_quantity_".to_string()
}

fn default_selected_prefix() -> String {
    "bundle_selected_optional_".to_string()
}

impl Default for BundleFieldNames {
    fn default() -> Self {
        Self {
            quantity_prefix: default_quantity_prefix(),
            selected_prefix: default_selected_prefix(),
        }
    }
}

impl BundleFieldNames {
    /// Field holding the quantity override of an item.
    pub fn quantity_field(&self, id: &BundledItemId) -> String {
        format!("{}{}", self.quantity_prefix, id)
    }

    /// Field holding the selection state of an optional item.
    pub fn selected_field(&self, id: &BundledItemId) -> String {
        format!("{}{}", self.selected_prefix, id)
    }
}
