//! # Contact Actor
//!
//! An inbox for messages left through the contact form. Create-only:
//! messages are stored in memory and logged, nothing is delivered
//! anywhere (there is no submission endpoint). Updates are rejected;
//! the inbox can be listed for display or inspection.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::ContactMessage;
use brewcraft_actors::{EntityActor, EntityClient};

/// Creates the contact inbox actor and its generic client.
pub fn new() -> (EntityActor<ContactMessage>, EntityClient<ContactMessage>) {
    EntityActor::new(32)
}
