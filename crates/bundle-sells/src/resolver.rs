//! Working out which bundle-sells a submission asks for.

use crate::selection::ProductSelection;
use turbo_commerce::bundle::{Bundle, BundleConfiguration};
use turbo_commerce::catalog::Catalog;
use turbo_commerce::{BundleFieldNames, BundledItemId, FormData, ProductId};

/// One bundle-sell to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSellEntry {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Bundle-sells to add, keyed by bundled item and in link order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleSellsConfiguration {
    entries: Vec<(BundledItemId, BundleSellEntry)>,
}

impl BundleSellsConfiguration {
    pub fn get(&self, id: &BundledItemId) -> Option<&BundleSellEntry> {
        self.entries
            .iter()
            .find(|(item_id, _)| item_id == id)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BundledItemId, &BundleSellEntry)> {
        self.entries.iter().map(|(id, entry)| (id, entry))
    }

    /// Entries without their keys.
    pub fn entries(&self) -> impl Iterator<Item = &BundleSellEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve the bundle-sells of a product against the submitted form.
///
/// Each linked product appears with its submitted quantity, or its default
/// quantity when none was submitted. Products that the shopper deselected,
/// that resolve to zero, or that have no submitted configuration (e.g. they
/// cannot be bought) are left out. Unknown products and products without
/// bundle-sells resolve to an empty configuration.
pub fn resolve(
    selection: ProductSelection<'_>,
    catalog: &Catalog,
    form: &FormData,
    fields: &BundleFieldNames,
) -> BundleSellsConfiguration {
    let mut resolved = BundleSellsConfiguration::default();

    let Some(product) = selection.resolve(catalog) else {
        return resolved;
    };

    if catalog.bundle_sell_links(product).is_empty() {
        return resolved;
    }

    let bundle = Bundle::from_bundle_sells(product, catalog);
    let configuration = BundleConfiguration::from_form(&bundle, form, fields);

    for item in bundle.items() {
        let Some(item_configuration) = configuration.get(&item.id) else {
            continue;
        };

        if item_configuration.is_deselected() {
            continue;
        }

        let quantity = item_configuration.quantity.unwrap_or(item.quantity);
        if quantity == 0 {
            continue;
        }

        resolved.entries.push((
            item.id.clone(),
            BundleSellEntry {
                product_id: item.product_id().clone(),
                quantity,
            },
        ));
    }

    tracing::debug!(
        product_id = %product.id,
        linked = bundle.items().len(),
        resolved = resolved.len(),
        "bundle-sells resolved"
    );

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_commerce::catalog::{BundleSellLink, Product, ProductStatus, ProductType};

    fn catalog() -> Catalog {
        Catalog::new()
            .with(
                Product::new("p", "Parent")
                    .with_bundle_sell(BundleSellLink::new("a"))
                    .with_bundle_sell(BundleSellLink::new("b").with_quantity(2)),
            )
            .with(Product::new("a", "A"))
            .with(Product::new("b", "B"))
            .with(Product::new("lonely", "Lonely"))
    }

    fn run(product: &str, form: &FormData) -> BundleSellsConfiguration {
        let id = ProductId::new(product);
        resolve(
            ProductSelection::ById(&id),
            &catalog(),
            form,
            &BundleFieldNames::default(),
        )
    }

    #[test]
    fn test_no_links_resolves_empty() {
        assert!(run("lonely", &FormData::new()).is_empty());
    }

    #[test]
    fn test_unknown_product_resolves_empty() {
        assert!(run("missing", &FormData::new()).is_empty());
    }

    #[test]
    fn test_defaults_without_overrides() {
        let resolved = run("p", &FormData::new());
        let quantities: Vec<_> = resolved
            .entries()
            .map(|e| (e.product_id.as_str(), e.quantity))
            .collect();
        assert_eq!(quantities, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_override_and_deselect() {
        let form = FormData::new()
            .with("bundle_quantity_a", "3")
            .with("bundle_selected_optional_b", "no");
        let resolved = run("p", &form);

        assert_eq!(resolved.len(), 1);
        assert_eq!(
            resolved.get(&BundledItemId::new("a")),
            Some(&BundleSellEntry {
                product_id: ProductId::new("a"),
                quantity: 3
            })
        );
        assert!(resolved.get(&BundledItemId::new("b")).is_none());
    }

    #[test]
    fn test_zero_quantity_skipped() {
        let form = FormData::new().with("bundle_quantity_b", "0");
        let resolved = run("p", &form);
        assert!(resolved.get(&BundledItemId::new("b")).is_none());
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_zero_default_quantity_skipped() {
        let catalog = Catalog::new()
            .with(Product::new("p", "P").with_bundle_sell(BundleSellLink::new("a").with_quantity(0)))
            .with(Product::new("a", "A"));
        let id = ProductId::new("p");
        let resolved = resolve(
            ProductSelection::ById(&id),
            &catalog,
            &FormData::new(),
            &BundleFieldNames::default(),
        );
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_unpurchasable_link_skipped() {
        let catalog = catalog().with(Product::new("b", "B").with_status(ProductStatus::Archived));
        let id = ProductId::new("p");
        let resolved = resolve(
            ProductSelection::ById(&id),
            &catalog,
            &FormData::new(),
            &BundleFieldNames::default(),
        );
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_negative_quantity_loses_sign() {
        let form = FormData::new().with("bundle_quantity_a", "-4");
        let resolved = run("p", &form);
        assert_eq!(resolved.get(&BundledItemId::new("a")).unwrap().quantity, 4);
    }

    #[test]
    fn test_decimal_quantity_keeps_integer_part() {
        let form = FormData::new()
            .with("bundle_quantity_a", "3.5")
            .with("bundle_quantity_b", "0abc");
        let resolved = run("p", &form);
        assert_eq!(resolved.get(&BundledItemId::new("a")).unwrap().quantity, 3);
        assert!(resolved.get(&BundledItemId::new("b")).is_none());
    }

    #[test]
    fn test_variation_resolves_parent_links() {
        let parent = Product::new("shirt", "Shirt")
            .with_type(ProductType::Variable)
            .with_bundle_sell(BundleSellLink::new("a"));
        let variation = Product::variation("shirt-l", &parent, std::iter::empty());
        let catalog = catalog().with(parent).with(variation.clone());

        let resolved = resolve(
            ProductSelection::ByProduct(&variation),
            &catalog,
            &FormData::new(),
            &BundleFieldNames::default(),
        );
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let form = FormData::new()
            .with("bundle_quantity_a", "2")
            .with("bundle_selected_optional_b", "yes");
        assert_eq!(run("p", &form), run("p", &form));
    }
}
