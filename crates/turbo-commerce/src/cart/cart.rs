//! Cart and cart line types.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::{CartItemKey, ProductId, SessionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// Free-form metadata attached to a cart line by extensions.
pub type CartItemData = serde_json::Map<String, serde_json::Value>;

/// Chosen attribute values of a variation (e.g., "size" => "L").
pub type VariationAttributes = BTreeMap<String, String>;

/// A shopping cart. Lines keep insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Owning session.
    pub session_id: SessionId,
    /// Lines in the cart.
    pub items: Vec<CartItem>,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart for a session.
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
            updated_at: current_timestamp(),
        }
    }

    /// Add a product to the cart and return the key of the line holding it.
    ///
    /// A variation id may be passed either as `variation_id` or directly as
    /// `product_id`. Adding content that produces an existing key increases
    /// that line's quantity.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - The product (or variation) is unknown or cannot be purchased
    /// - A variable product is added without a variation
    /// - The resulting line quantity exceeds MAX_QUANTITY_PER_ITEM or the stock
    pub fn add_to_cart(
        &mut self,
        catalog: &Catalog,
        product_id: &ProductId,
        quantity: u32,
        variation_id: Option<&ProductId>,
        variation: &VariationAttributes,
        item_data: CartItemData,
    ) -> Result<CartItemKey, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        let product = catalog
            .get(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;

        let (parent, data) = resolve_purchase(catalog, product, variation_id)?;

        if !data.is_purchasable() {
            return Err(CommerceError::ProductNotPurchasable(data.name.clone()));
        }

        let variation_id = data.is_variation().then(|| data.id.clone());
        let variation = if variation.is_empty() && data.is_variation() {
            data.attributes.clone()
        } else {
            variation.clone()
        };

        let key = Self::generate_key(&parent.id, variation_id.as_ref(), &variation, &item_data);
        let existing = self.get(&key).map(|item| item.quantity).unwrap_or(0);
        let new_quantity = existing
            .checked_add(quantity)
            .filter(|q| *q <= MAX_QUANTITY_PER_ITEM)
            .ok_or(CommerceError::QuantityExceedsLimit(
                i64::from(existing) + i64::from(quantity),
                i64::from(MAX_QUANTITY_PER_ITEM),
            ))?;

        if !data.inventory.can_fulfill(i64::from(new_quantity)) {
            return Err(CommerceError::InsufficientInventory {
                product_id: data.id.to_string(),
                requested: i64::from(new_quantity),
                available: data.inventory.available(),
            });
        }

        if let Some(item) = self.get_mut(&key) {
            item.quantity = new_quantity;
        } else {
            self.items.push(CartItem {
                key: key.clone(),
                product_id: parent.id.clone(),
                variation_id,
                variation,
                quantity,
                data: data.clone(),
                meta: item_data,
            });
        }

        self.updated_at = current_timestamp();
        Ok(key)
    }

    /// Derive a line key from everything that makes a line distinct.
    pub fn generate_key(
        product_id: &ProductId,
        variation_id: Option<&ProductId>,
        variation: &VariationAttributes,
        item_data: &CartItemData,
    ) -> CartItemKey {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        product_id.hash(&mut hasher);
        variation_id.hash(&mut hasher);
        variation.hash(&mut hasher);
        if !item_data.is_empty() {
            serde_json::to_string(item_data)
                .unwrap_or_default()
                .hash(&mut hasher);
        }
        CartItemKey::new(format!("{:016x}", hasher.finish()))
    }

    /// Remove a line from the cart.
    pub fn remove(&mut self, key: &CartItemKey) -> Option<CartItem> {
        let index = self.items.iter().position(|i| &i.key == key)?;
        self.updated_at = current_timestamp();
        Some(self.items.remove(index))
    }

    /// Clear all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get a line by key.
    pub fn get(&self, key: &CartItemKey) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    pub fn get_mut(&mut self, key: &CartItemKey) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| &i.key == key)
    }

    pub fn contains(&self, key: &CartItemKey) -> bool {
        self.get(key).is_some()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("anonymous")
    }
}

/// Work out the parent product and the product actually bought.
fn resolve_purchase<'a>(
    catalog: &'a Catalog,
    product: &'a Product,
    variation_id: Option<&ProductId>,
) -> Result<(&'a Product, &'a Product), CommerceError> {
    if product.is_variation() {
        let parent = catalog.parent_of(product);
        return Ok((parent, product));
    }

    if !product.has_variations() {
        return Ok((product, product));
    }

    let variation_id =
        variation_id.ok_or_else(|| CommerceError::VariationRequired(product.name.clone()))?;
    let variation = catalog
        .get(variation_id)
        .filter(|v| v.is_variation() && v.parent_id.as_ref() == Some(&product.id))
        .ok_or_else(|| CommerceError::InvalidVariation {
            product_id: product.id.to_string(),
            variation_id: variation_id.to_string(),
        })?;

    Ok((product, variation))
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Content-derived line key.
    pub key: CartItemKey,
    /// Product ID (the parent for variations).
    pub product_id: ProductId,
    /// Variation bought, if any.
    pub variation_id: Option<ProductId>,
    /// Chosen variation attributes.
    pub variation: VariationAttributes,
    /// Quantity.
    pub quantity: u32,
    /// Snapshot of the product bought.
    pub data: Product,
    /// Extension metadata.
    pub meta: CartItemData,
}

impl CartItem {
    /// Metadata value as a string.
    pub fn meta_str(&self, name: &str) -> Option<&str> {
        self.meta.get(name).and_then(serde_json::Value::as_str)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InventoryLevel, ProductType};

    fn catalog() -> Catalog {
        let shirt = Product::new("shirt", "Shirt").with_type(ProductType::Variable);
        let large = Product::variation(
            "shirt-l",
            &shirt,
            [("size".to_string(), "L".to_string())],
        );
        Catalog::new()
            .with(Product::new("tent", "Tent"))
            .with(Product::new("stove", "Stove").with_inventory(InventoryLevel::new(2)))
            .with(shirt)
            .with(large)
    }

    fn add(cart: &mut Cart, catalog: &Catalog, id: &str, quantity: u32) -> Result<CartItemKey, CommerceError> {
        cart.add_to_cart(
            catalog,
            &ProductId::new(id),
            quantity,
            None,
            &VariationAttributes::new(),
            CartItemData::new(),
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new("session-123");
        assert!(cart.is_empty());
        assert_eq!(cart.session_id.as_str(), "session-123");
    }

    #[test]
    fn test_add_item() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let key = add(&mut cart, &catalog, "tent", 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get(&key).unwrap().data.name, "Tent");
    }

    #[test]
    fn test_same_content_merges_lines() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let first = add(&mut cart, &catalog, "tent", 1).unwrap();
        let second = add(&mut cart, &catalog, "tent", 2).unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_item_data_separates_lines() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let plain = add(&mut cart, &catalog, "tent", 1).unwrap();

        let mut data = CartItemData::new();
        data.insert("gift".to_string(), serde_json::json!(true));
        let tagged = cart
            .add_to_cart(
                &catalog,
                &ProductId::new("tent"),
                1,
                None,
                &VariationAttributes::new(),
                data,
            )
            .unwrap();

        assert_ne!(plain, tagged);
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_variation_added_under_parent() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let key = cart
            .add_to_cart(
                &catalog,
                &ProductId::new("shirt"),
                1,
                Some(&ProductId::new("shirt-l")),
                &VariationAttributes::new(),
                CartItemData::new(),
            )
            .unwrap();

        let item = cart.get(&key).unwrap();
        assert_eq!(item.product_id, ProductId::new("shirt"));
        assert_eq!(item.variation_id, Some(ProductId::new("shirt-l")));
        assert_eq!(item.variation.get("size").map(String::as_str), Some("L"));
        assert_eq!(item.data.id, ProductId::new("shirt-l"));
    }

    #[test]
    fn test_variable_product_requires_variation() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let result = add(&mut cart, &catalog, "shirt", 1);
        assert!(matches!(result, Err(CommerceError::VariationRequired(_))));
    }

    #[test]
    fn test_stock_counts_existing_line() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        add(&mut cart, &catalog, "stove", 2).unwrap();
        let result = add(&mut cart, &catalog, "stove", 1);
        assert!(matches!(
            result,
            Err(CommerceError::InsufficientInventory { requested: 3, .. })
        ));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_invalid_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        assert_eq!(
            add(&mut cart, &catalog, "tent", 0),
            Err(CommerceError::InvalidQuantity(0))
        );
    }

    #[test]
    fn test_quantity_limit() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        assert!(add(&mut cart, &catalog, "tent", MAX_QUANTITY_PER_ITEM + 1).is_err());
    }

    #[test]
    fn test_unknown_product() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        assert!(matches!(
            add(&mut cart, &catalog, "nope", 1),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let key = add(&mut cart, &catalog, "tent", 1).unwrap();
        assert!(cart.remove(&key).is_some());
        assert!(cart.is_empty());
        assert!(cart.remove(&key).is_none());
    }
}
