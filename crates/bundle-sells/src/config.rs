//! Bundle-sells configuration.

use crate::error::BundleSellsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Switches for the bundle-sells extension.
///
/// ```toml
/// enabled = true
/// validate = true
/// augment_message = true
/// required_bundles_version = "5.6"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSellsConfig {
    /// Register the extension at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Validate submitted bundle-sell choices before adding.
    #[serde(default = "default_true")]
    pub validate: bool,

    /// Name bundle-sells in the added-to-cart confirmation.
    #[serde(default = "default_true")]
    pub augment_message: bool,

    /// Oldest storefront bundles version supported.
    #[serde(default = "default_required_bundles_version")]
    pub required_bundles_version: String,
}

fn default_true() -> bool {
    true
}

fn default_required_bundles_version() -> String {
    "5.6".to_string()
}

impl Default for BundleSellsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            validate: true,
            augment_message: true,
            required_bundles_version: default_required_bundles_version(),
        }
    }
}

impl BundleSellsConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleSellsError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| BundleSellsError::ConfigRead {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, BundleSellsError> {
        Ok(toml::from_str(content)?)
    }
}
