//! Request messages exchanged between [`crate::EntityClient`] and
//! [`crate::EntityActor`].
//!
//! The variants follow the resource lifecycle — create, read (single
//! and listing), update, delete — plus an `Action` escape hatch for
//! operations that do not fit that shape. Because the enum is generic
//! over the [`Entity`], the payload types are checked at compile time:
//! a cart request cannot be sent to a catalog actor.

use crate::entity::Entity;
use crate::error::ActorError;
use tokio::sync::oneshot;

/// One-shot reply channel carried inside every request.
pub type Reply<T> = oneshot::Sender<Result<T, ActorError>>;

/// A request addressed to an [`crate::EntityActor`].
#[derive(Debug)]
pub enum EntityRequest<T: Entity> {
    Create {
        params: T::Create,
        respond_to: Reply<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Reply<Option<T>>,
    },
    /// Snapshot of every entity in the store, in creation order.
    List { respond_to: Reply<Vec<T>> },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Reply<T>,
    },
    Delete { id: T::Id, respond_to: Reply<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Reply<T::ActionResult>,
    },
}
