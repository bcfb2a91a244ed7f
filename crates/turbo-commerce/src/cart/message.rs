//! "Added to cart" confirmation messages.

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Products and quantities named in a confirmation, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuantities {
    entries: Vec<(ProductId, u32)>,
}

impl ProductQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding a single product.
    pub fn single(product_id: ProductId, quantity: u32) -> Self {
        let mut products = Self::new();
        products.set(product_id, quantity);
        products
    }

    /// Set the quantity of a product. An existing entry keeps its position.
    pub fn set(&mut self, product_id: ProductId, quantity: u32) {
        match self.entries.iter_mut().find(|(id, _)| *id == product_id) {
            Some(entry) => entry.1 = quantity,
            None => self.entries.push((product_id, quantity)),
        }
    }

    pub fn get(&self, product_id: &ProductId) -> Option<u32> {
        self.entries
            .iter()
            .find(|(id, _)| id == product_id)
            .map(|(_, quantity)| *quantity)
    }

    /// The first product, i.e. the one the shopper added.
    pub fn first(&self) -> Option<&ProductId> {
        self.entries.first().map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.entries.iter().map(|(id, quantity)| (id, *quantity))
    }

    /// Sum of all quantities.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, q)| u64::from(*q)).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turns the products just added into a confirmation.
pub trait MessageFormatter {
    fn format(
        &self,
        catalog: &Catalog,
        products: &ProductQuantities,
    ) -> Result<String, CommerceError>;
}

/// Formatter producing `“A” and 2 × “B” have been added to your cart.`
#[derive(Debug, Clone, Copy)]
pub struct DefaultMessageFormatter {
    pub show_quantities: bool,
}

impl MessageFormatter for DefaultMessageFormatter {
    fn format(
        &self,
        catalog: &Catalog,
        products: &ProductQuantities,
    ) -> Result<String, CommerceError> {
        add_to_cart_message(catalog, products, self.show_quantities)
    }
}

/// Build the confirmation for `products`.
///
/// ```
/// use turbo_commerce::prelude::*;
///
/// let catalog = Catalog::new().with(Product::new("1", "Tent"));
/// let products = ProductQuantities::single(ProductId::new("1"), 2);
/// let message = add_to_cart_message(&catalog, &products, true).unwrap();
/// assert_eq!(message, "2 × “Tent” have been added to your cart.");
/// ```
pub fn add_to_cart_message(
    catalog: &Catalog,
    products: &ProductQuantities,
    show_quantities: bool,
) -> Result<String, CommerceError> {
    let titles = products
        .iter()
        .map(|(product_id, quantity)| {
            let product = catalog
                .get(product_id)
                .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
            let title = format!("“{}”", product.name);
            Ok(if show_quantities && quantity > 1 {
                format!("{} × {}", quantity, title)
            } else {
                title
            })
        })
        .collect::<Result<Vec<_>, CommerceError>>()?;

    let verb = if products.total() == 1 { "has" } else { "have" };
    Ok(format!(
        "{} {} been added to your cart.",
        format_list_of_items(&titles),
        verb
    ))
}

/// Join items as "A", "A and B" or "A, B and C".
pub fn format_list_of_items(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
