//! Which product a bundle-sell lookup is about.

use turbo_commerce::catalog::{Catalog, Product};
use turbo_commerce::ProductId;

/// A product given either by id or as an already loaded product.
#[derive(Debug, Clone, Copy)]
pub enum ProductSelection<'a> {
    ById(&'a ProductId),
    ByProduct(&'a Product),
}

impl<'a> ProductSelection<'a> {
    /// Look the product up. Unknown ids give `None`.
    pub fn resolve(self, catalog: &'a Catalog) -> Option<&'a Product> {
        match self {
            ProductSelection::ById(id) => catalog.get(id),
            ProductSelection::ByProduct(product) => Some(product),
        }
    }
}

impl<'a> From<&'a ProductId> for ProductSelection<'a> {
    fn from(id: &'a ProductId) -> Self {
        ProductSelection::ById(id)
    }
}

impl<'a> From<&'a Product> for ProductSelection<'a> {
    fn from(product: &'a Product) -> Self {
        ProductSelection::ByProduct(product)
    }
}
