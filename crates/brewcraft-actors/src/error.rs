//! Errors raised by the runtime itself, as opposed to the domain
//! errors each [`crate::Entity`] defines for its own operations.

/// Failure modes of the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// The actor's request channel is closed; the actor is gone.
    #[error("actor closed")]
    ActorClosed,
    /// The actor dropped the reply channel without answering.
    #[error("actor dropped the reply channel")]
    ReplyDropped,
    /// No entity with the requested id exists in the store.
    #[error("not found: {0}")]
    NotFound(String),
    /// The entity's own hook failed.
    #[error("entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}
