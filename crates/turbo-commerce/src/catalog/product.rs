//! Product, variation and bundle-sell link types.

use crate::catalog::InventoryLevel;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }
}

/// Product type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Simple product with no variations.
    #[default]
    Simple,
    /// Product sold through its variations (e.g., size, color).
    Variable,
    /// One purchasable option of a variable product.
    Variation,
    /// Bundle of multiple products.
    Bundle,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Variable => "variable",
            ProductType::Variation => "variation",
            ProductType::Bundle => "bundle",
        }
    }
}

/// A product recommended alongside a parent ("frequently bought together").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSellLink {
    /// The upsell product.
    pub product_id: ProductId,
    /// Quantity added when the shopper does not override it.
    #[serde(default = "default_link_quantity")]
    pub quantity: u32,
    /// Highest quantity a shopper may choose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<u32>,
}

fn default_link_quantity() -> u32 {
    1
}

impl BundleSellLink {
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: default_link_quantity(),
            quantity_max: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_quantity_max(mut self, max: u32) -> Self {
        self.quantity_max = Some(max);
        self
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit.
    pub sku: String,
    /// Product name.
    pub name: String,
    /// Product visibility status.
    pub status: ProductStatus,
    /// Type of product.
    pub product_type: ProductType,
    /// Parent product (variations only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ProductId>,
    /// Attribute values defining a variation (e.g., "size" => "L").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Stock level.
    #[serde(default)]
    pub inventory: InventoryLevel,
    /// Products offered together with this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundle_sells: Vec<BundleSellLink>,
}

impl Product {
    /// Create a new simple product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            sku: id.to_string(),
            id,
            name: name.into(),
            status: ProductStatus::Active,
            product_type: ProductType::Simple,
            parent_id: None,
            attributes: BTreeMap::new(),
            inventory: InventoryLevel::untracked(),
            bundle_sells: Vec::new(),
        }
    }

    /// Create a variation of `parent`.
    pub fn variation(
        id: impl Into<ProductId>,
        parent: &Product,
        attributes: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let attributes: BTreeMap<String, String> = attributes.into_iter().collect();
        let label = attributes.values().cloned().collect::<Vec<_>>().join(", ");
        let mut product = Self::new(id, format!("{} - {}", parent.name, label));
        product.product_type = ProductType::Variation;
        product.parent_id = Some(parent.id.clone());
        product.attributes = attributes;
        product
    }

    pub fn with_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryLevel) -> Self {
        self.inventory = inventory;
        self
    }

    /// Attach a bundle-sell link.
    pub fn with_bundle_sell(mut self, link: BundleSellLink) -> Self {
        self.bundle_sells.push(link);
        self
    }

    /// Check if the product can be bought at all.
    pub fn is_purchasable(&self) -> bool {
        self.status == ProductStatus::Active && self.inventory.is_available()
    }

    /// Check if this is a variable product (sold through variations).
    pub fn has_variations(&self) -> bool {
        self.product_type == ProductType::Variable
    }

    pub fn is_variation(&self) -> bool {
        self.product_type == ProductType::Variation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_is_purchasable() {
        let product = Product::new("p1", "Tent");
        assert!(product.is_purchasable());
        assert_eq!(product.sku, "p1");
    }

    #[test]
    fn test_draft_not_purchasable() {
        let product = Product::new("p1", "Tent").with_status(ProductStatus::Draft);
        assert!(!product.is_purchasable());
    }

    #[test]
    fn test_out_of_stock_not_purchasable() {
        let product = Product::new("p1", "Tent").with_inventory(InventoryLevel::new(0));
        assert!(!product.is_purchasable());
    }

    #[test]
    fn test_variation_name_and_parent() {
        let parent = Product::new("shirt", "Shirt").with_type(ProductType::Variable);
        let variation = Product::variation(
            "shirt-l",
            &parent,
            [("size".to_string(), "L".to_string())],
        );
        assert!(variation.is_variation());
        assert_eq!(variation.parent_id, Some(ProductId::new("shirt")));
        assert_eq!(variation.name, "Shirt - L");
    }

    #[test]
    fn test_link_defaults_from_json() {
        let link: BundleSellLink = serde_json::from_str(r#"{"product_id":"9"}"#).unwrap();
        assert_eq!(link.quantity, 1);
        assert_eq!(link.quantity_max, None);
    }
}
