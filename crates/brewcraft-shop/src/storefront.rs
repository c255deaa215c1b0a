//! Runtime orchestration: starting, wiring, and stopping the shop's
//! actors.

use crate::clients::{CartClient, CatalogClient, ContactClient};
use crate::content;
use crate::{cart_actor, catalog_actor, contact_actor};
use tracing::{error, info};

/// Errors from storefront startup and shutdown.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Seeding the menu catalog failed during startup.
    #[error("catalog seeding failed: {0}")]
    Seed(#[from] crate::catalog_actor::CatalogError),
    /// An actor task panicked or was cancelled.
    #[error("actor task failed: {0}")]
    ActorTask(String),
}

/// The running shop: all actors spawned, catalog seeded, clients
/// wired.
///
/// Construction order matters only for the context injection: the
/// catalog actor starts first, so its client can be seeded with the
/// standard menu and then handed to the cart actor as context. The
/// contact inbox is independent of both.
pub struct Storefront {
    /// Client for browsing the menu catalog.
    pub catalog: CatalogClient,

    /// Client for visitor carts (the order draft manager).
    pub carts: CartClient,

    /// Client for the contact message inbox.
    pub contact: ContactClient,

    /// Handles for every running actor task, used by shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Spawns all actors and seeds the catalog with the standard
    /// menu.
    pub async fn open() -> Result<Self, StorefrontError> {
        // 1. Create actor/client pairs; no dependencies yet.
        let (catalog_actor, catalog_generic) = catalog_actor::new();
        let (cart_actor, cart_generic) = cart_actor::new();
        let (contact_actor, contact_generic) = contact_actor::new();

        let catalog = CatalogClient::new(catalog_generic);
        let carts = CartClient::new(cart_generic);
        let contact = ContactClient::new(contact_generic);

        // 2. Spawn, injecting the catalog client into the cart actor.
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(catalog.clone()));
        let contact_handle = tokio::spawn(contact_actor.run(()));

        // 3. Seed the menu before any visitor can browse it.
        for spec in content::standard_menu() {
            catalog.add_item(spec).await?;
        }
        info!("storefront open, menu seeded");

        Ok(Self {
            catalog,
            carts,
            contact,
            handles: vec![catalog_handle, cart_handle, contact_handle],
        })
    }

    /// Gracefully stops every actor.
    ///
    /// Dropping the clients closes their channels; each actor drains
    /// what is already queued and exits its loop. The cart actor holds
    /// a catalog client clone in its context, but the dependency graph
    /// is acyclic, so closure still propagates: once the cart actor
    /// exits, the last catalog sender is gone too.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("shutting down storefront");

        drop(self.carts);
        drop(self.contact);
        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "actor task failed");
                return Err(StorefrontError::ActorTask(format!("{e:?}")));
            }
        }

        info!("storefront closed");
        Ok(())
    }
}
