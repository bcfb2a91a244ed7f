//! Validating and adding bundle-sells alongside their parent product.

use crate::resolver::resolve;
use crate::selection::ProductSelection;
use serde_json::Value;
use turbo_commerce::bundle::{validate_bundle_add_to_cart, Bundle};
use turbo_commerce::cart::{
    AddToCartRequest, AddedItem, Cart, CartItem, CartItemData, Notices, VariationAttributes,
};
use turbo_commerce::catalog::Catalog;
use turbo_commerce::{BundleFieldNames, CartItemKey, FormData, ProductId, StorefrontConfig};

/// Line metadata on a bundle-sell pointing at its parent line.
pub const BUNDLE_SELL_OF: &str = "bundle_sell_of";

/// Line metadata on a parent listing the bundle-sell lines it spawned.
pub const BUNDLE_SELLS: &str = "bundle_sells";

/// Parent line of a bundle-sell line.
pub fn bundle_sell_of(item: &CartItem) -> Option<CartItemKey> {
    item.meta_str(BUNDLE_SELL_OF).map(CartItemKey::new)
}

/// Bundle-sell lines spawned by a parent line.
pub fn bundle_sells(item: &CartItem) -> Vec<CartItemKey> {
    item.meta
        .get(BUNDLE_SELLS)
        .and_then(Value::as_array)
        .map(|keys| {
            keys.iter()
                .filter_map(Value::as_str)
                .map(CartItemKey::new)
                .collect()
        })
        .unwrap_or_default()
}

/// Whether the submitted form is an add-to-cart of `product_id` itself,
/// as opposed to code adding lines on its own.
pub fn is_genuine_submission(form: &FormData, field: &str, product_id: &ProductId) -> bool {
    form.non_empty(field) == Some(product_id.as_str())
}

/// Check the submitted bundle-sell choices before anything is added.
///
/// A `false` verdict from an earlier check is passed through untouched.
/// Returns `false`, blocking the parent too, when the choices cannot be
/// added; the reasons are queued as error notices.
pub fn validate_add(
    add: bool,
    catalog: &Catalog,
    request: &AddToCartRequest,
    fields: &BundleFieldNames,
    notices: &mut Notices,
) -> bool {
    if !add {
        return add;
    }

    let Some(product) = catalog.get(&request.product_id) else {
        return add;
    };

    if catalog.bundle_sell_links(product).is_empty() {
        return add;
    }

    let bundle = Bundle::from_bundle_sells(product, catalog);
    if !validate_bundle_add_to_cart(&bundle, request.quantity, &request.form, fields, notices) {
        tracing::info!(
            product_id = %request.product_id,
            quantity = request.quantity,
            "bundle-sell configuration rejected"
        );
        return false;
    }

    add
}

/// Add the chosen bundle-sells of a freshly added line.
///
/// Only acts when the form submitted is an add-to-cart of that very
/// product. Every bundle-sell is added as its own line tagged with
/// [`BUNDLE_SELL_OF`]; the parent line collects their keys under
/// [`BUNDLE_SELLS`]. A bundle-sell the cart refuses is skipped without
/// undoing anything. Returns the keys of the lines added, in order.
pub fn apply_add(
    cart: &mut Cart,
    catalog: &Catalog,
    added: &AddedItem,
    form: &FormData,
    config: &StorefrontConfig,
) -> Vec<CartItemKey> {
    let mut keys = Vec::new();

    if !is_genuine_submission(form, &config.add_to_cart_field, &added.product_id) {
        tracing::debug!(
            product_id = %added.product_id,
            "not a submitted add-to-cart, bundle-sells skipped"
        );
        return keys;
    }

    let product = if added.variation_id.is_some() {
        catalog.get(&added.product_id).cloned()
    } else {
        cart.get(&added.key).map(|item| item.data.clone())
    };

    let Some(product) = product else {
        return keys;
    };

    let resolved = resolve(
        ProductSelection::ByProduct(&product),
        catalog,
        form,
        &config.bundle_fields,
    );

    for entry in resolved.entries() {
        let mut data = CartItemData::new();
        data.insert(
            BUNDLE_SELL_OF.to_string(),
            Value::String(added.key.to_string()),
        );

        let key = match cart.add_to_cart(
            catalog,
            &entry.product_id,
            entry.quantity,
            None,
            &VariationAttributes::new(),
            data,
        ) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(
                    parent_key = %added.key,
                    product_id = %entry.product_id,
                    quantity = entry.quantity,
                    error = %e,
                    "bundle-sell could not be added"
                );
                continue;
            }
        };

        if let Some(parent) = cart.get_mut(&added.key) {
            link_bundle_sell(parent, &key);
        }

        tracing::debug!(
            parent_key = %added.key,
            cart_item_key = %key,
            product_id = %entry.product_id,
            quantity = entry.quantity,
            "bundle-sell added"
        );
        keys.push(key);
    }

    keys
}

/// Record `key` in the parent's bundle-sell list, once.
fn link_bundle_sell(parent: &mut CartItem, key: &CartItemKey) {
    let entry = parent
        .meta
        .entry(BUNDLE_SELLS.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));

    if !entry.is_array() {
        *entry = Value::Array(Vec::new());
    }

    if let Value::Array(keys) = entry {
        if !keys.iter().any(|k| k.as_str() == Some(key.as_str())) {
            keys.push(Value::String(key.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_commerce::catalog::{BundleSellLink, InventoryLevel, Product};

    fn catalog() -> Catalog {
        Catalog::new()
            .with(
                Product::new("p", "Parent")
                    .with_bundle_sell(BundleSellLink::new("a"))
                    .with_bundle_sell(BundleSellLink::new("b").with_quantity(2)),
            )
            .with(Product::new("a", "A"))
            .with(Product::new("b", "B").with_inventory(InventoryLevel::new(2)))
            .with(Product::new("plain", "Plain"))
    }

    fn add_parent(cart: &mut Cart, catalog: &Catalog, id: &str) -> AddedItem {
        let product_id = ProductId::new(id);
        let key = cart
            .add_to_cart(
                catalog,
                &product_id,
                1,
                None,
                &VariationAttributes::new(),
                CartItemData::new(),
            )
            .unwrap();
        AddedItem {
            key,
            product_id,
            quantity: 1,
            variation_id: None,
            variation: VariationAttributes::new(),
            cart_item_data: CartItemData::new(),
        }
    }

    #[test]
    fn test_validate_passes_through_false() {
        let request = AddToCartRequest::new("p", 1);
        let mut notices = Notices::new();
        assert!(!validate_add(
            false,
            &catalog(),
            &request,
            &BundleFieldNames::default(),
            &mut notices
        ));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_validate_without_links() {
        let request = AddToCartRequest::new("plain", 1);
        let mut notices = Notices::new();
        assert!(validate_add(
            true,
            &catalog(),
            &request,
            &BundleFieldNames::default(),
            &mut notices
        ));
    }

    #[test]
    fn test_validate_rejects_short_stock() {
        let form = FormData::new()
            .with("add-to-cart", "p")
            .with("bundle_quantity_b", "3");
        let request = AddToCartRequest::new("p", 1).with_form(form);
        let mut notices = Notices::new();

        assert!(!validate_add(
            true,
            &catalog(),
            &request,
            &BundleFieldNames::default(),
            &mut notices
        ));
        assert!(notices.has_errors());
    }

    #[test]
    fn test_apply_links_both_ways() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let added = add_parent(&mut cart, &catalog, "p");
        let form = FormData::new().with("add-to-cart", "p");

        let keys = apply_add(&mut cart, &catalog, &added, &form, &StorefrontConfig::default());

        assert_eq!(keys.len(), 2);
        assert_eq!(cart.unique_item_count(), 3);
        for key in &keys {
            assert_eq!(bundle_sell_of(cart.get(key).unwrap()), Some(added.key.clone()));
        }
        assert_eq!(bundle_sells(cart.get(&added.key).unwrap()), keys);
    }

    #[test]
    fn test_apply_requires_matching_submission() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let added = add_parent(&mut cart, &catalog, "p");

        let config = StorefrontConfig::default();
        let other = FormData::new().with("add-to-cart", "plain");
        assert!(apply_add(&mut cart, &catalog, &added, &other, &config).is_empty());
        assert!(apply_add(&mut cart, &catalog, &added, &FormData::new(), &config).is_empty());
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_apply_continues_after_refused_line() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let added = add_parent(&mut cart, &catalog, "p");
        let form = FormData::new()
            .with("add-to-cart", "p")
            .with("bundle_quantity_a", "5")
            .with("bundle_quantity_b", "3");

        let keys = apply_add(&mut cart, &catalog, &added, &form, &StorefrontConfig::default());

        assert_eq!(keys.len(), 1);
        assert_eq!(cart.get(&keys[0]).unwrap().quantity, 5);
        assert!(cart.contains(&added.key));
        assert_eq!(bundle_sells(cart.get(&added.key).unwrap()), keys);
    }

    #[test]
    fn test_apply_without_parent_line() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let added = add_parent(&mut cart, &catalog, "p");
        cart.remove(&added.key);
        let form = FormData::new().with("add-to-cart", "p");

        let keys = apply_add(&mut cart, &catalog, &added, &form, &StorefrontConfig::default());
        assert!(keys.is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_link_bundle_sell_once() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let added = add_parent(&mut cart, &catalog, "p");
        let key = CartItemKey::new("k1");

        let parent = cart.get_mut(&added.key).unwrap();
        link_bundle_sell(parent, &key);
        link_bundle_sell(parent, &key);
        assert_eq!(bundle_sells(parent), vec![key]);
    }

    #[test]
    fn test_link_bundle_sell_replaces_garbage() {
        let catalog = catalog();
        let mut cart = Cart::new("s");
        let added = add_parent(&mut cart, &catalog, "p");

        let parent = cart.get_mut(&added.key).unwrap();
        parent
            .meta
            .insert(BUNDLE_SELLS.to_string(), Value::String("oops".to_string()));
        link_bundle_sell(parent, &CartItemKey::new("k1"));
        assert_eq!(bundle_sells(parent), vec![CartItemKey::new("k1")]);
    }
}
