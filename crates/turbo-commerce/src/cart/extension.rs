//! Extension points of the add-to-cart flow.
//!
//! Extensions are registered on the [`Storefront`](crate::Storefront) at
//! startup and called in registration order at three fixed steps:
//!
//! 1. `validate_add` after the built-in checks, before anything is added;
//! 2. `on_added` right after the line is added, before the session is saved;
//! 3. `filter_message` on the confirmation shown to the shopper.

use crate::cart::{AddToCartRequest, AddedItem, Cart, MessageFormatter, Notices, ProductQuantities};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::form::FormData;

/// Which message filters run on a render.
///
/// An extension rendering a message on its own behalf bypasses itself;
/// every other filter still runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageGuard<'a> {
    #[default]
    Open,
    /// Skip the filter of the named extension.
    Bypass(&'a str),
}

impl MessageGuard<'_> {
    /// Whether the filter of extension `name` is skipped.
    pub fn skips(&self, name: &str) -> bool {
        matches!(self, MessageGuard::Bypass(bypassed) if *bypassed == name)
    }
}

/// Read-only view handed to validators.
pub struct ValidationContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a StorefrontConfig,
    pub request: &'a AddToCartRequest,
}

/// State handed to extensions after a line was added.
pub struct AddedContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a StorefrontConfig,
    pub cart: &'a mut Cart,
    pub added: &'a AddedItem,
    pub form: &'a FormData,
}

/// Everything needed to produce a filtered confirmation.
#[derive(Clone, Copy)]
pub struct MessageRenderer<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a StorefrontConfig,
    pub form: &'a FormData,
    pub formatter: &'a dyn MessageFormatter,
    pub extensions: &'a [Box<dyn CartExtension>],
}

impl<'a> MessageRenderer<'a> {
    /// Format the confirmation for `products` and run it through every
    /// filter not skipped by `guard`.
    pub fn render(
        &self,
        products: &ProductQuantities,
        guard: MessageGuard<'_>,
    ) -> Result<String, CommerceError> {
        let mut message = self.formatter.format(self.catalog, products)?;

        for extension in self.extensions {
            let name = extension.name();
            if guard.skips(name) {
                continue;
            }
            let ctx = MessageContext {
                catalog: self.catalog,
                config: self.config,
                form: self.form,
                renderer: *self,
                extension: name,
            };
            message = extension.filter_message(message, products, &ctx);
        }

        Ok(message)
    }
}

/// State handed to message filters.
pub struct MessageContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a StorefrontConfig,
    pub form: &'a FormData,
    renderer: MessageRenderer<'a>,
    extension: &'a str,
}

impl<'a> MessageContext<'a> {
    /// Name of the extension whose filter is running.
    pub fn extension(&self) -> &str {
        self.extension
    }

    /// Render a fresh confirmation for `products`. Every filter runs except
    /// the calling extension's own.
    pub fn render(&self, products: &ProductQuantities) -> Result<String, CommerceError> {
        self.renderer.render(products, MessageGuard::Bypass(self.extension))
    }
}

/// Hooks an extension can provide. All have pass-through defaults.
pub trait CartExtension {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Decide whether the add may proceed. `add` is the verdict so far.
    fn validate_add(
        &self,
        _ctx: &ValidationContext<'_>,
        _notices: &mut Notices,
        add: bool,
    ) -> bool {
        add
    }

    /// React to a line just added to the cart.
    fn on_added(&self, _ctx: &mut AddedContext<'_>) {}

    /// Rewrite the confirmation message.
    fn filter_message(
        &self,
        message: String,
        _products: &ProductQuantities,
        _ctx: &MessageContext<'_>,
    ) -> String {
        message
    }
}
