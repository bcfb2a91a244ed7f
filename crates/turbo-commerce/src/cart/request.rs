//! Add-to-cart requests.

use crate::cart::{CartItemData, VariationAttributes};
use crate::config::StorefrontConfig;
use crate::form::FormData;
use crate::ids::{CartItemKey, ProductId};

const VARIATION_ATTRIBUTE_PREFIX: &str = "attribute_";

/// A product the shopper (or code) wants in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub variation_id: Option<ProductId>,
    pub variation: VariationAttributes,
    pub cart_item_data: CartItemData,
    /// Fields submitted with the request. Empty for programmatic adds.
    pub form: FormData,
}

impl AddToCartRequest {
    /// A programmatic add with no submitted form.
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            variation_id: None,
            variation: VariationAttributes::new(),
            cart_item_data: CartItemData::new(),
            form: FormData::new(),
        }
    }

    pub fn with_variation(mut self, variation_id: impl Into<ProductId>) -> Self {
        self.variation_id = Some(variation_id.into());
        self
    }

    pub fn with_form(mut self, form: FormData) -> Self {
        self.form = form;
        self
    }

    /// Read an add-to-cart form submission.
    ///
    /// Returns `None` when the form does not carry the add-to-cart field.
    /// A missing or malformed `quantity` means one item.
    pub fn from_form(form: FormData, config: &StorefrontConfig) -> Option<Self> {
        let product_id = ProductId::new(form.non_empty(&config.add_to_cart_field)?);
        let quantity = form.absint("quantity").unwrap_or(1);
        let variation_id = form.non_empty("variation_id").map(ProductId::new);
        let variation = form
            .iter()
            .filter(|(name, value)| {
                name.starts_with(VARIATION_ATTRIBUTE_PREFIX) && !value.trim().is_empty()
            })
            .map(|(name, value)| (name.to_string(), value.trim().to_string()))
            .collect();

        Some(Self {
            product_id,
            quantity,
            variation_id,
            variation,
            cart_item_data: CartItemData::new(),
            form,
        })
    }
}

/// A line that was just added to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedItem {
    pub key: CartItemKey,
    pub product_id: ProductId,
    pub quantity: u32,
    pub variation_id: Option<ProductId>,
    pub variation: VariationAttributes,
    pub cart_item_data: CartItemData,
}
