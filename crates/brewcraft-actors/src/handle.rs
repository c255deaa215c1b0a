//! Shared surface for domain-specific client wrappers.

use crate::{ActorError, Entity, EntityClient};
use async_trait::async_trait;

/// Trait for clients that wrap an [`EntityClient`] with domain
/// methods.
///
/// Implementors supply access to the inner generic client and a
/// mapping from runtime errors to their own error type; `get`, `list`
/// and `delete` then come for free, so each wrapper only writes the
/// methods that are actually domain-specific.
#[async_trait]
pub trait EntityHandle<T: Entity>: Send + Sync {
    /// The wrapper's error type.
    type Error: Send + Sync;

    /// The wrapped generic client.
    fn inner(&self) -> &EntityClient<T>;

    /// Maps a runtime error into the wrapper's error type.
    fn map_error(e: ActorError) -> Self::Error;

    /// Fetches an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Lists every entity in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Deletes an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
