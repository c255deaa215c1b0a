//! [`Entity`] implementation for [`MenuItem`].

use crate::catalog_actor::error::CatalogError;
use crate::model::{MenuItem, MenuItemId, MenuItemSpec};
use async_trait::async_trait;
use brewcraft_actors::Entity;

/// Catalog entries have no custom actions; queries go through the
/// store listing instead.
#[derive(Debug)]
pub enum MenuAction {}

#[async_trait]
impl Entity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemSpec;
    type Update = ();
    type Action = MenuAction;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: MenuItemId, spec: MenuItemSpec) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: spec.name,
            price: spec.price,
            description: spec.description,
            image: spec.image,
            category: spec.category,
            popular: spec.popular,
        })
    }

    /// Menu entries never change after seeding.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(CatalogError::Immutable)
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
