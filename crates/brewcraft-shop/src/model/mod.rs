//! Domain data types: the menu catalog, the order draft, and contact
//! messages.

pub mod cart;
pub mod contact;
pub mod menu;

pub use cart::{
    Cart, CartId, CartLine, CartView, DraftSelection, LineId, OrderReceipt, PaymentMethod,
};
pub use contact::{ContactMessage, ContactMessageCreate, MessageId};
pub use menu::{Category, MenuItem, MenuItemId, MenuItemSpec, Price};
