//! High-level API for the catalog actor.

use crate::catalog_actor::CatalogError;
use crate::model::{Category, MenuItem, MenuItemId, MenuItemSpec};
use async_trait::async_trait;
use brewcraft_actors::{ActorError, EntityClient, EntityHandle};
use tracing::{debug, instrument};

/// Client for browsing (and, during startup, seeding) the menu
/// catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: EntityClient<MenuItem>,
}

impl CatalogClient {
    pub fn new(inner: EntityClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Adds one menu item. Only the storefront calls this, while
    /// seeding the standard menu at startup.
    #[instrument(skip(self))]
    pub async fn add_item(&self, spec: MenuItemSpec) -> Result<MenuItemId, CatalogError> {
        debug!("sending request");
        self.inner
            .create(spec)
            .await
            .map_err(|e| CatalogError::ActorCommunication(e.to_string()))
    }

    /// The full menu, in seeding order.
    #[instrument(skip(self))]
    pub async fn menu(&self) -> Result<Vec<MenuItem>, CatalogError> {
        self.list().await
    }

    /// The items of one category, in seeding order. A pure read; the
    /// "selected category" pointer lives with the caller.
    #[instrument(skip(self))]
    pub async fn items_in(&self, category: Category) -> Result<Vec<MenuItem>, CatalogError> {
        let mut items = self.list().await?;
        items.retain(|item| item.category == category);
        Ok(items)
    }

    /// Looks an item up by its display name.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, CatalogError> {
        let items = self.list().await?;
        Ok(items.into_iter().find(|item| item.name == name))
    }
}

#[async_trait]
impl EntityHandle<MenuItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &EntityClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: ActorError) -> Self::Error {
        CatalogError::ActorCommunication(e.to_string())
    }
}
