//! Catalog error type.

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Menu entries are seeded once and never updated.
    #[error("menu entries are immutable")]
    Immutable,
    /// The actor could not be reached or answered with a runtime
    /// failure.
    #[error("catalog actor communication failed: {0}")]
    ActorCommunication(String),
}
