//! Contact inbox error type.

/// Errors from contact inbox operations.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Messages cannot be edited after they are left.
    #[error("contact messages are immutable")]
    Immutable,
    /// The actor could not be reached or answered with a runtime
    /// failure.
    #[error("contact actor communication failed: {0}")]
    ActorCommunication(String),
}
