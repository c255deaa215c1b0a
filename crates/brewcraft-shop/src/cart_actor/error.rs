//! Cart error type.

/// Errors from order-draft operations.
///
/// None of these can arise from the widget-constrained UI; they guard
/// the typed actor boundary, where a caller could in principle confirm
/// without a draft or name an item the menu does not carry.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// A draft operation was requested while no draft is open.
    #[error("no draft is open")]
    NoDraftOpen,
    /// The named item is not on the menu.
    #[error("unknown menu item: {0}")]
    UnknownItem(String),
    /// Submit was requested on a cart with no lines.
    #[error("cannot submit an empty order")]
    EmptyOrder,
    /// The catalog could not be consulted while opening a draft.
    #[error("catalog lookup failed: {0}")]
    Catalog(String),
    /// The actor could not be reached or answered with a runtime
    /// failure.
    #[error("cart actor communication failed: {0}")]
    ActorCommunication(String),
}
