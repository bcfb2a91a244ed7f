//! Bundle-sells error types.

use thiserror::Error;

/// Errors raised while setting up bundle-sells.
///
/// Request handling never fails; these only come from loading
/// configuration and registering with a storefront.
#[derive(Error, Debug)]
pub enum BundleSellsError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Version string is not dotted numbers.
    #[error("Invalid version: {0:?}")]
    InvalidVersion(String),

    /// Storefront bundles feature is too old.
    #[error("Bundle-sells requires bundles version {required} or higher (found {found})")]
    IncompatibleHost { required: String, found: String },
}
