//! Posted bundle configuration.

use crate::bundle::Bundle;
use crate::config::BundleFieldNames;
use crate::form::FormData;
use crate::ids::{BundledItemId, ProductId};

/// Submitted choices for one bundled item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledItemConfiguration {
    pub product_id: ProductId,
    /// Quantity override, when one was submitted.
    pub quantity: Option<u32>,
    /// `Some(false)` only when the shopper explicitly deselected the item.
    pub optional_selected: Option<bool>,
}

impl BundledItemConfiguration {
    pub fn is_deselected(&self) -> bool {
        self.optional_selected == Some(false)
    }
}

/// Per-item configuration of a bundle, in bundled-item order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleConfiguration {
    entries: Vec<(BundledItemId, BundledItemConfiguration)>,
}

impl BundleConfiguration {
    /// Parse the submitted fields for every item of `bundle`.
    ///
    /// Items whose product cannot be purchased get no entry.
    pub fn from_form(bundle: &Bundle, form: &FormData, fields: &BundleFieldNames) -> Self {
        let entries = bundle
            .items()
            .iter()
            .filter(|item| item.product.is_purchasable())
            .map(|item| {
                let quantity = form.absint(&fields.quantity_field(&item.id));
                let optional_selected = if item.optional {
                    form.non_empty(&fields.selected_field(&item.id))
                        .map(|value| value != "no")
                } else {
                    None
                };

                let configuration = BundledItemConfiguration {
                    product_id: item.product_id().clone(),
                    quantity,
                    optional_selected,
                };
                (item.id.clone(), configuration)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, id: &BundledItemId) -> Option<&BundledItemConfiguration> {
        self.entries
            .iter()
            .find(|(item_id, _)| item_id == id)
            .map(|(_, configuration)| configuration)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BundledItemId, &BundledItemConfiguration)> {
        self.entries.iter().map(|(id, configuration)| (id, configuration))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
