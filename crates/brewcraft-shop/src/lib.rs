//! # BrewCraft Shop
//!
//! The café ordering system: a static menu catalog, per-visitor order
//! drafts (carts), and a contact inbox, each managed by its own actor
//! on the [`brewcraft_actors`] runtime.
//!
//! - [`model`] — domain types: menu items and prices, cart lines and
//!   drafts, payment methods, contact messages.
//! - [`content`] — the static menu, testimonials, and shop profile.
//! - [`catalog_actor`], [`cart_actor`], [`contact_actor`] — the three
//!   actors and their entity implementations.
//! - [`clients`] — typed wrappers over the generic actor clients.
//! - [`storefront`] — the orchestrator that spawns, seeds, wires, and
//!   shuts down the whole system.

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod contact_actor;
pub mod content;
pub mod model;
pub mod storefront;
