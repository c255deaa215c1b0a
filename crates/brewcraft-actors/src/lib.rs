//! # BrewCraft Actor Runtime
//!
//! A small, type-safe actor runtime for managing stateful entities.
//! Each entity type gets its own actor task that owns an in-memory
//! store and processes requests strictly in arrival order, so entity
//! state is never touched by two operations at once and no locks are
//! needed.
//!
//! The runtime splits into three layers:
//!
//! 1. **Entity layer** ([`Entity`]) — the domain logic: what an entity
//!    is, how it is created, and which custom actions it handles.
//! 2. **Runtime layer** ([`EntityActor`]) — the event loop that owns
//!    the store and drives the lifecycle hooks.
//! 3. **Interface layer** ([`EntityClient`], [`EntityHandle`]) — the
//!    cloneable async handles callers use to talk to an actor.
//!
//! ## Quick example
//!
//! ```rust
//! use brewcraft_actors::{Entity, EntityActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u64, text: String }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] enum NoteAction {}
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! #[async_trait]
//! impl Entity for Note {
//!     type Id = u64;
//!     type Create = NoteCreate;
//!     type Update = ();
//!     type Action = NoteAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u64, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = EntityActor::<Note>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     let note = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(note.text, "hello");
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies between actors are wired at *runtime*, not at
//! construction: every actor is created standalone, and the clients it
//! needs are handed to [`EntityActor::run`] as its
//! [`Entity::Context`]. This late binding is what lets an actor whose
//! entities consult another actor (say, a cart validating items
//! against a catalog) be spawned without any circular construction
//! order.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], an in-memory
//! stand-in with the same API as [`EntityClient`], so client wrappers
//! can be unit-tested without spawning a single actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod telemetry;

pub use actor::EntityActor;
pub use client::EntityClient;
pub use entity::Entity;
pub use error::ActorError;
pub use handle::EntityHandle;
pub use message::{EntityRequest, Reply};
