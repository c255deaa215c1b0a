//! # Cart Actor
//!
//! The order draft manager — the one stateful component of the shop.
//!
//! Each visitor session is a [`Cart`] entity inside this actor: its
//! accepted lines, the at-most-one draft selection being configured,
//! the payment choice, and the checkout visibility flag. The actor
//! processes a session's operations strictly in order, which is
//! exactly the serialization the single-visitor interaction model
//! calls for.
//!
//! ## Dependencies
//!
//! The cart consults the catalog when a draft is opened, so its
//! context is a [`CatalogClient`](crate::clients::CatalogClient),
//! injected at spawn time by the storefront:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new();
//! tokio::spawn(cart_actor.run(catalog_client.clone()));
//! ```
//!
//! ## Structure
//!
//! - [`entity`] — [`Entity`](brewcraft_actors::Entity) impl wiring
//!   actions onto the pure transitions in [`crate::model::cart`]
//! - [`actions`] — [`CartAction`] / [`CartActionResult`]
//! - [`error`] — [`CartError`]
//! - [`new()`] — factory for the actor/client pair

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CartCreate;
pub use error::*;

use crate::model::Cart;
use brewcraft_actors::{EntityActor, EntityClient};

/// Creates the cart actor and its generic client.
pub fn new() -> (EntityActor<Cart>, EntityClient<Cart>) {
    EntityActor::new(32)
}
