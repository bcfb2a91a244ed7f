//! Inventory tracking types.

use serde::{Deserialize, Serialize};

/// Stock level of a purchasable product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryLevel {
    /// Total quantity in stock.
    pub quantity: i64,
    /// Quantity reserved for pending orders.
    pub reserved: i64,
    /// Whether to track inventory for this item.
    pub track_inventory: bool,
    /// Whether to allow orders when out of stock.
    pub allow_backorder: bool,
}

impl InventoryLevel {
    /// Create a new inventory level with tracking enabled.
    pub fn new(quantity: i64) -> Self {
        Self {
            quantity,
            reserved: 0,
            track_inventory: true,
            allow_backorder: false,
        }
    }

    /// Create an inventory level with no tracking (infinite stock).
    pub fn untracked() -> Self {
        Self {
            quantity: 0,
            reserved: 0,
            track_inventory: false,
            allow_backorder: true,
        }
    }

    /// Get available quantity (total minus reserved).
    pub fn available(&self) -> i64 {
        self.quantity - self.reserved
    }

    /// Check if the item is available for purchase.
    pub fn is_available(&self) -> bool {
        if !self.track_inventory {
            return true;
        }
        self.available() > 0 || self.allow_backorder
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        if !self.track_inventory {
            return true;
        }
        self.available() >= quantity || self.allow_backorder
    }
}

impl Default for InventoryLevel {
    fn default() -> Self {
        Self::untracked()
    }
}
