//! Add-to-cart validation of a bundle configuration.

use crate::bundle::{Bundle, BundleConfiguration};
use crate::cart::Notices;
use crate::config::BundleFieldNames;
use crate::form::FormData;

/// Check that `bundle` can be added `quantity` times with the submitted choices.
///
/// Every problem found is reported as an error notice; the first one stops
/// the check. Deselected items and items resolving to zero are not checked.
pub fn validate_bundle_add_to_cart(
    bundle: &Bundle,
    quantity: u32,
    form: &FormData,
    fields: &BundleFieldNames,
    notices: &mut Notices,
) -> bool {
    if quantity == 0 {
        notices.error(format!(
            "Please choose a quantity for “{}”.",
            bundle.parent().name
        ));
        return false;
    }

    let configuration = BundleConfiguration::from_form(bundle, form, fields);

    for item in bundle.items() {
        let Some(item_configuration) = configuration.get(&item.id) else {
            continue;
        };

        if item_configuration.is_deselected() {
            continue;
        }

        let item_quantity = item_configuration.quantity.unwrap_or(item.quantity);
        if item_quantity == 0 {
            continue;
        }

        if let Some(max) = item.quantity_max {
            if item_quantity > max {
                notices.error(format!(
                    "The quantity of “{}” cannot be higher than {}.",
                    item.product.name, max
                ));
                return false;
            }
        }

        if !item.product.inventory.can_fulfill(i64::from(item_quantity)) {
            notices.error(format!(
                "“{}” does not have enough stock ({} available).",
                item.product.name,
                item.product.inventory.available().max(0)
            ));
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundleSellLink, Catalog, InventoryLevel, Product};

    fn bundle() -> Bundle {
        let parent = Product::new("p", "Parent")
            .with_bundle_sell(BundleSellLink::new("a").with_quantity_max(2))
            .with_bundle_sell(BundleSellLink::new("b"));
        let catalog = Catalog::new()
            .with(parent.clone())
            .with(Product::new("a", "A"))
            .with(Product::new("b", "B").with_inventory(InventoryLevel::new(1)));
        Bundle::from_bundle_sells(&parent, &catalog)
    }

    fn validate(form: &FormData, quantity: u32) -> (bool, Notices) {
        let mut notices = Notices::new();
        let valid = validate_bundle_add_to_cart(
            &bundle(),
            quantity,
            form,
            &BundleFieldNames::default(),
            &mut notices,
        );
        (valid, notices)
    }

    #[test]
    fn test_defaults_are_valid() {
        let (valid, notices) = validate(&FormData::new(), 1);
        assert!(valid);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_quantity_above_max_rejected() {
        let form = FormData::new().with("bundle_quantity_a", "3");
        let (valid, notices) = validate(&form, 1);
        assert!(!valid);
        assert_eq!(
            notices.errors().next(),
            Some("The quantity of “A” cannot be higher than 2.")
        );
    }

    #[test]
    fn test_insufficient_stock_rejected() {
        let form = FormData::new().with("bundle_quantity_b", "2");
        let (valid, notices) = validate(&form, 1);
        assert!(!valid);
        assert!(notices.has_errors());
    }

    #[test]
    fn test_deselected_item_not_checked() {
        let form = FormData::new()
            .with("bundle_quantity_b", "5")
            .with("bundle_selected_optional_b", "no");
        let (valid, _) = validate(&form, 1);
        assert!(valid);
    }

    #[test]
    fn test_zero_parent_quantity_rejected() {
        let (valid, notices) = validate(&FormData::new(), 0);
        assert!(!valid);
        assert!(notices.has_errors());
    }
}
