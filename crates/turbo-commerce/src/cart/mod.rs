//! Shopping cart module.
//!
//! Contains the cart and its lines, add-to-cart requests, confirmation
//! messages, notices, session persistence and the extension points.

mod cart;
mod extension;
mod message;
mod notice;
mod request;
mod session;

pub use cart::{Cart, CartItem, CartItemData, VariationAttributes, MAX_QUANTITY_PER_ITEM};
pub use extension::{
    AddedContext, CartExtension, MessageContext, MessageGuard, MessageRenderer, ValidationContext,
};
pub use message::{
    add_to_cart_message, format_list_of_items, DefaultMessageFormatter, MessageFormatter,
    ProductQuantities,
};
pub use notice::{Notice, NoticeKind, Notices};
pub use request::{AddToCartRequest, AddedItem};
pub use session::{MemorySessionStore, SessionData, SessionStore};
