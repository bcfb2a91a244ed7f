//! In-memory product catalog.

use crate::catalog::{BundleSellLink, Product};
use crate::ids::ProductId;
use std::collections::HashMap;

/// Product lookup by identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    /// Builder-style insert.
    pub fn with(mut self, product: Product) -> Self {
        self.insert(product);
        self
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.contains_key(id)
    }

    /// Parent of a variation, or the product itself.
    pub fn parent_of<'a>(&'a self, product: &'a Product) -> &'a Product {
        product
            .parent_id
            .as_ref()
            .and_then(|id| self.get(id))
            .unwrap_or(product)
    }

    /// Bundle-sell links of a product. Variations use their parent's links.
    pub fn bundle_sell_links<'a>(&'a self, product: &'a Product) -> &'a [BundleSellLink] {
        &self.parent_of(product).bundle_sells
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
