//! The add-to-cart pipeline.

use crate::cart::{
    AddToCartRequest, AddedContext, AddedItem, Cart, CartExtension, DefaultMessageFormatter,
    MessageFormatter, MessageGuard, MessageRenderer, Notices, ProductQuantities, SessionStore,
    ValidationContext,
};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::form::FormData;
use crate::ids::{CartItemKey, SessionId};

/// Result of a successful add-to-cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartOutcome {
    /// Line holding the requested product.
    pub key: CartItemKey,
    /// Confirmation shown to the shopper.
    pub message: String,
}

/// One shopper's view of the store for the duration of a request.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Cart,
    session: Box<dyn SessionStore>,
    formatter: Box<dyn MessageFormatter>,
    extensions: Vec<Box<dyn CartExtension>>,
    notices: Notices,
}

impl Storefront {
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        session: impl SessionStore + 'static,
        session_id: impl Into<SessionId>,
    ) -> Self {
        let formatter = DefaultMessageFormatter {
            show_quantities: config.show_quantities,
        };
        Self {
            config,
            catalog,
            cart: Cart::new(session_id),
            session: Box::new(session),
            formatter: Box::new(formatter),
            extensions: Vec::new(),
            notices: Notices::new(),
        }
    }

    /// Register an extension. Extensions run in registration order.
    pub fn register(&mut self, extension: impl CartExtension + 'static) {
        tracing::info!(extension = extension.name(), "cart extension registered");
        self.extensions.push(Box::new(extension));
    }

    /// Replace the confirmation formatter.
    pub fn set_message_formatter(&mut self, formatter: impl MessageFormatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    /// Names of registered extensions.
    pub fn extension_names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Version of the bundles feature offered to extensions.
    pub fn bundles_version(&self) -> &str {
        &self.config.bundles_version
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Where the cart is saved after every add.
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    /// Replace the cart with the one saved for this session, if any.
    pub fn restore_session(&mut self) -> Result<bool, CommerceError> {
        match self.session.load_cart(&self.cart.session_id)? {
            Some(cart) => {
                self.cart = cart;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Handle a submitted add-to-cart form.
    ///
    /// Returns `Ok(None)` when the form is not an add-to-cart submission.
    pub fn handle_add_to_cart_form(
        &mut self,
        form: FormData,
    ) -> Result<Option<AddToCartOutcome>, CommerceError> {
        match AddToCartRequest::from_form(form, &self.config) {
            Some(request) => self.add_to_cart(&request).map(Some),
            None => Ok(None),
        }
    }

    /// Add a product to the cart.
    ///
    /// Steps, in order: built-in validation, extension validation, adding the
    /// line, extension `on_added` hooks, saving the session, rendering the
    /// confirmation. Any failure before the line is added leaves the cart
    /// untouched and queues an error notice. Once the line is added the add
    /// succeeds; a confirmation that cannot be rendered is logged and left
    /// empty, with no success notice.
    pub fn add_to_cart(
        &mut self,
        request: &AddToCartRequest,
    ) -> Result<AddToCartOutcome, CommerceError> {
        if !self.validate(request) {
            tracing::info!(product_id = %request.product_id, "add to cart rejected");
            return Err(CommerceError::ValidationFailed(request.product_id.to_string()));
        }

        let key = match self.cart.add_to_cart(
            &self.catalog,
            &request.product_id,
            request.quantity,
            request.variation_id.as_ref(),
            &request.variation,
            request.cart_item_data.clone(),
        ) {
            Ok(key) => key,
            Err(e) => {
                self.notices.error(e.to_string());
                return Err(e);
            }
        };

        let item = self.cart.get(&key);
        let added = AddedItem {
            key: key.clone(),
            product_id: request.product_id.clone(),
            quantity: request.quantity,
            variation_id: item.and_then(|i| i.variation_id.clone()),
            variation: item.map(|i| i.variation.clone()).unwrap_or_default(),
            cart_item_data: request.cart_item_data.clone(),
        };

        for extension in &self.extensions {
            let mut ctx = AddedContext {
                catalog: &self.catalog,
                config: &self.config,
                cart: &mut self.cart,
                added: &added,
                form: &request.form,
            };
            extension.on_added(&mut ctx);
        }

        self.session.save_cart(&self.cart)?;

        let products = ProductQuantities::single(request.product_id.clone(), request.quantity);
        let renderer = MessageRenderer {
            catalog: &self.catalog,
            config: &self.config,
            form: &request.form,
            formatter: self.formatter.as_ref(),
            extensions: &self.extensions,
        };
        let message = match renderer.render(&products, MessageGuard::Open) {
            Ok(message) => {
                self.notices.success(message.clone());
                message
            }
            Err(e) => {
                tracing::warn!(
                    product_id = %request.product_id,
                    cart_item_key = %key,
                    error = %e,
                    "could not render add-to-cart confirmation"
                );
                String::new()
            }
        };

        Ok(AddToCartOutcome { key, message })
    }

    fn validate(&mut self, request: &AddToCartRequest) -> bool {
        let mut add = true;

        if request.quantity == 0 {
            self.notices.error("Please choose a quantity.");
            add = false;
        } else if !self.catalog.contains(&request.product_id) {
            self.notices
                .error(format!("Product {} does not exist.", request.product_id));
            add = false;
        }

        let ctx = ValidationContext {
            catalog: &self.catalog,
            config: &self.config,
            request,
        };

        for extension in &self.extensions {
            add = extension.validate_add(&ctx, &mut self.notices, add);
        }

        add
    }
}
