//! Composite bundles and their items.

use crate::catalog::{Catalog, Product};
use crate::ids::{BundledItemId, ProductId};

/// One product inside a bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct BundledItem {
    pub id: BundledItemId,
    pub product: Product,
    /// Quantity used when the submission does not override it.
    pub quantity: u32,
    pub quantity_max: Option<u32>,
    /// Optional items can be deselected by the shopper.
    pub optional: bool,
}

impl BundledItem {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }
}

/// A product together with the items bundled with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    parent: Product,
    items: Vec<BundledItem>,
}

impl Bundle {
    /// Build a transient bundle presenting the bundle-sells of `parent` as
    /// optional bundled items.
    ///
    /// Links to products missing from the catalog are dropped, as are
    /// repeated links to the same product (first one wins).
    pub fn from_bundle_sells(parent: &Product, catalog: &Catalog) -> Self {
        let mut items: Vec<BundledItem> = Vec::new();

        for link in catalog.bundle_sell_links(parent) {
            let Some(product) = catalog.get(&link.product_id) else {
                tracing::debug!(
                    parent_id = %parent.id,
                    product_id = %link.product_id,
                    "bundle-sell product missing from catalog"
                );
                continue;
            };

            let id = BundledItemId::from(&link.product_id);
            if items.iter().any(|item| item.id == id) {
                continue;
            }

            items.push(BundledItem {
                id,
                product: product.clone(),
                quantity: link.quantity,
                quantity_max: link.quantity_max,
                optional: true,
            });
        }

        Self {
            parent: parent.clone(),
            items,
        }
    }

    pub fn parent(&self) -> &Product {
        &self.parent
    }

    /// Bundled items in definition order.
    pub fn items(&self) -> &[BundledItem] {
        &self.items
    }

    pub fn item(&self, id: &BundledItemId) -> Option<&BundledItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
