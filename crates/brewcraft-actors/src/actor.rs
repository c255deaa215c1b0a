//! The generic actor event loop.
//!
//! [`EntityActor`] is the server half of the runtime: it owns the
//! entity store and the receiving end of the request channel, and it
//! processes messages one at a time. Exclusive ownership of the store
//! inside a single task is the whole concurrency story — there is no
//! shared mutable state and therefore nothing to lock.

use crate::client::EntityClient;
use crate::entity::Entity;
use crate::error::ActorError;
use crate::message::EntityRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Actor managing a collection of entities of one type.
///
/// Created together with its [`EntityClient`] by [`EntityActor::new`];
/// the actor itself is consumed by [`EntityActor::run`], which should
/// be spawned on its own task. Ids are minted from a monotonic `u64`
/// counter starting at 1, so they are unique for the lifetime of the
/// actor and listings come back in creation order.
pub struct EntityActor<T: Entity> {
    receiver: mpsc::Receiver<EntityRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u64,
}

impl<T: Entity> EntityActor<T> {
    /// Creates an actor and the client paired with it.
    ///
    /// `buffer` is the request channel capacity; senders wait when it
    /// is full.
    pub fn new(buffer: usize) -> (Self, EntityClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, EntityClient::new(sender))
    }

    /// Runs the event loop until every client is dropped.
    ///
    /// `context` is injected into each entity hook, which is how an
    /// entity reaches dependencies (other actors' clients) that were
    /// wired after this actor was constructed.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("unknown");
        info!(entity_type, "actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                EntityRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(ActorError::Entity(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "create failed");
                            let _ = respond_to.send(Err(ActorError::Entity(Box::new(e))));
                        }
                    }
                }
                EntityRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "get");
                    let _ = respond_to.send(Ok(item));
                }
                EntityRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "list");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                EntityRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "update failed");
                            let _ = respond_to.send(Err(ActorError::Entity(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
                EntityRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(ActorError::Entity(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
                EntityRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| ActorError::Entity(Box::new(e)));
                        match &result {
                            Ok(_) => debug!(entity_type, %id, "action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "actor shut down");
    }
}
