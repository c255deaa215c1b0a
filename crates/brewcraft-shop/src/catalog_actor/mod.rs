//! # Catalog Actor
//!
//! Manages the menu catalog: every [`MenuItem`] the shop offers.
//!
//! The catalog is write-once. [`crate::storefront::Storefront`] seeds
//! it from [`crate::content::standard_menu`] during startup, and from
//! then on it only answers reads — update requests are rejected with
//! [`CatalogError::Immutable`]. Category filtering and name lookup
//! live on [`crate::clients::CatalogClient`], which works off the
//! store listing.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use brewcraft_actors::{EntityActor, EntityClient};

/// Creates the catalog actor and its generic client.
pub fn new() -> (EntityActor<MenuItem>, EntityClient<MenuItem>) {
    EntityActor::new(32)
}
