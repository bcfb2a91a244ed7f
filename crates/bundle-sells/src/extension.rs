//! The bundle-sells cart extension.

use crate::cart::{apply_add, is_genuine_submission, validate_add};
use crate::config::BundleSellsConfig;
use crate::error::BundleSellsError;
use crate::message::augment_message;
use crate::version::ensure_at_least;
use turbo_commerce::cart::{
    AddedContext, CartExtension, MessageContext, Notices, ProductQuantities, ValidationContext,
};
use turbo_commerce::Storefront;

/// Adds the chosen bundle-sells next to the product they are linked to.
#[derive(Debug, Clone, Default)]
pub struct BundleSells {
    config: BundleSellsConfig,
}

impl BundleSells {
    pub const NAME: &'static str = "bundle-sells";

    pub fn new(config: BundleSellsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BundleSellsConfig {
        &self.config
    }

    /// Register bundle-sells on `storefront`.
    ///
    /// Returns `Ok(false)` when disabled. Fails without registering when
    /// the storefront's bundles version is older than required, leaving
    /// the storefront working as before.
    pub fn register(
        storefront: &mut Storefront,
        config: BundleSellsConfig,
    ) -> Result<bool, BundleSellsError> {
        if !config.enabled {
            tracing::info!("bundle-sells disabled");
            return Ok(false);
        }

        let found = storefront.bundles_version();
        if let Err(e) = ensure_at_least(found, &config.required_bundles_version) {
            tracing::warn!(error = %e, "bundle-sells not registered");
            return Err(e);
        }

        storefront.register(Self::new(config));
        Ok(true)
    }
}

impl CartExtension for BundleSells {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate_add(&self, ctx: &ValidationContext<'_>, notices: &mut Notices, add: bool) -> bool {
        if !self.config.validate {
            return add;
        }
        validate_add(
            add,
            ctx.catalog,
            ctx.request,
            &ctx.config.bundle_fields,
            notices,
        )
    }

    fn on_added(&self, ctx: &mut AddedContext<'_>) {
        apply_add(ctx.cart, ctx.catalog, ctx.added, ctx.form, ctx.config);
    }

    fn filter_message(
        &self,
        message: String,
        products: &ProductQuantities,
        ctx: &MessageContext<'_>,
    ) -> String {
        if !self.config.augment_message {
            return message;
        }

        let Some(product_id) = products.first() else {
            return message;
        };

        if !is_genuine_submission(ctx.form, &ctx.config.add_to_cart_field, product_id) {
            return message;
        }

        augment_message(message, products, ctx)
    }
}
