//! Domain clients wrapping the generic actor handles.

pub mod cart_client;
pub mod catalog_client;
pub mod contact_client;

pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use contact_client::ContactClient;
