//! The contract every managed resource implements.
//!
//! Defining one trait for all resource types lets the runtime
//! ([`crate::EntityActor`]) be written once: the associated types pin
//! down the id, the creation/update payloads, the custom action set,
//! and the error type, so a request carrying the wrong payload for an
//! entity simply does not compile.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait implemented by any entity managed by an [`crate::EntityActor`].
///
/// # Hooks
///
/// `on_create` and `on_delete` have default no-op implementations;
/// override them only when creation or removal has side effects (for
/// example, consulting another actor through the context). `on_update`
/// and `handle_action` are where an entity's own behavior lives.
///
/// # Errors
///
/// Each entity defines a single error type covering all of its
/// operations. One enum per actor keeps the client surface small; the
/// trade-off is that the type is the union of everything that can go
/// wrong anywhere in the entity.
#[async_trait]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Unique identifier. `From<u64>` lets the runtime mint ids from
    /// its monotonic counter; `Ord` keeps store listings in creation
    /// order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Entity-specific operations beyond create/read/update/delete.
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` when
    /// the entity needs none.
    type Context: Send + Sync;

    /// The entity's error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from a freshly minted id and the creation
    /// payload. Runs synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called right after construction, before the entity enters the
    /// store. Failing here aborts the creation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every update request.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called just before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a custom action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
