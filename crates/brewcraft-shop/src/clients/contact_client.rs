//! High-level API for the contact inbox actor.

use crate::contact_actor::ContactError;
use crate::model::{ContactMessage, ContactMessageCreate, MessageId};
use async_trait::async_trait;
use brewcraft_actors::{ActorError, EntityClient, EntityHandle};
use tracing::{debug, instrument};

/// Client for the contact inbox.
#[derive(Clone)]
pub struct ContactClient {
    inner: EntityClient<ContactMessage>,
}

impl ContactClient {
    pub fn new(inner: EntityClient<ContactMessage>) -> Self {
        Self { inner }
    }

    /// Leaves a message in the inbox.
    #[instrument(skip(self, params), fields(from = %params.name))]
    pub async fn leave_message(
        &self,
        params: ContactMessageCreate,
    ) -> Result<MessageId, ContactError> {
        debug!("sending request");
        self.inner
            .create(params)
            .await
            .map_err(|e| ContactError::ActorCommunication(e.to_string()))
    }

    /// Every message left so far, oldest first.
    #[instrument(skip(self))]
    pub async fn messages(&self) -> Result<Vec<ContactMessage>, ContactError> {
        self.list().await
    }
}

#[async_trait]
impl EntityHandle<ContactMessage> for ContactClient {
    type Error = ContactError;

    fn inner(&self) -> &EntityClient<ContactMessage> {
        &self.inner
    }

    fn map_error(e: ActorError) -> Self::Error {
        ContactError::ActorCommunication(e.to_string())
    }
}
