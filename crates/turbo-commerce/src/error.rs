//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in e-commerce operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but cannot be bought.
    #[error("Product cannot be purchased: {0}")]
    ProductNotPurchasable(String),

    /// Variable product added without choosing a variation.
    #[error("Please choose product options for {0}")]
    VariationRequired(String),

    /// Variation does not belong to the product.
    #[error("Variation {variation_id} does not belong to {product_id}")]
    InvalidVariation {
        product_id: String,
        variation_id: String,
    },

    /// Insufficient inventory.
    #[error("Insufficient inventory for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: String,
        requested: i64,
        available: i64,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Add-to-cart rejected by a validator.
    #[error("Add to cart rejected for {0}")]
    ValidationFailed(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
