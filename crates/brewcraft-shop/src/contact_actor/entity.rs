//! [`Entity`] implementation for [`ContactMessage`].

use crate::contact_actor::error::ContactError;
use crate::model::{ContactMessage, ContactMessageCreate, MessageId};
use async_trait::async_trait;
use brewcraft_actors::Entity;
use tracing::info;

/// The inbox only stores; no custom actions.
#[derive(Debug)]
pub enum ContactAction {}

#[async_trait]
impl Entity for ContactMessage {
    type Id = MessageId;
    type Create = ContactMessageCreate;
    type Update = ();
    type Action = ContactAction;
    type ActionResult = ();
    type Context = ();
    type Error = ContactError;

    fn from_create_params(id: MessageId, params: ContactMessageCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            subject: params.subject,
            body: params.body,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        info!(id = %self.id, from = %self.name, subject = %self.subject, "message received");
        Ok(())
    }

    /// Messages are immutable once left.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(ContactError::Immutable)
    }

    async fn handle_action(&mut self, action: ContactAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
