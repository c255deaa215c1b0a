//! The generic client half of an actor pair.

use crate::entity::Entity;
use crate::error::ActorError;
use crate::message::EntityRequest;
use tokio::sync::{mpsc, oneshot};

/// Async handle to an [`crate::EntityActor`].
///
/// Holds only the sending end of the request channel, so cloning is
/// cheap and clones can be handed to any number of tasks. Every method
/// sends a request carrying a oneshot reply channel and awaits the
/// answer.
#[derive(Clone)]
pub struct EntityClient<T: Entity> {
    sender: mpsc::Sender<EntityRequest<T>>,
}

impl<T: Entity> EntityClient<T> {
    pub fn new(sender: mpsc::Sender<EntityRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Create { params, respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ReplyDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Get { id, respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ReplyDropped)?
    }

    /// Snapshot of every entity, in creation order.
    pub async fn list(&self) -> Result<Vec<T>, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::List { respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ReplyDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ReplyDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Delete { id, respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ReplyDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ReplyDropped)?
    }
}
