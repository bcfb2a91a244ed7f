//! Naming bundle-sells in the added-to-cart confirmation.

use crate::resolver::resolve;
use crate::selection::ProductSelection;
use turbo_commerce::cart::{MessageContext, ProductQuantities};

/// Rewrite the confirmation so it also lists the bundle-sells of the
/// product that was added (the first entry of `products`).
///
/// The new message is rendered through [`MessageContext::render`], which
/// runs every other filter but not this one. The original message is kept
/// when there are no bundle-sells or the new message cannot be rendered.
pub fn augment_message(
    message: String,
    products: &ProductQuantities,
    ctx: &MessageContext<'_>,
) -> String {
    let Some(parent_id) = products.first() else {
        return message;
    };

    let resolved = resolve(
        ProductSelection::ById(parent_id),
        ctx.catalog,
        ctx.form,
        &ctx.config.bundle_fields,
    );

    if resolved.is_empty() {
        return message;
    }

    let mut merged = products.clone();
    for entry in resolved.entries() {
        merged.set(entry.product_id.clone(), entry.quantity);
    }

    match ctx.render(&merged) {
        Ok(augmented) => augmented,
        Err(e) => {
            tracing::warn!(
                product_id = %parent_id,
                error = %e,
                "could not render bundle-sells confirmation"
            );
            message
        }
    }
}
