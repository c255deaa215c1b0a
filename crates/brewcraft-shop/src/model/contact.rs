//! Contact messages left through the "send us a message" form.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for contact messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MessageId(pub u64);

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "message_{}", self.0)
    }
}

/// A message a visitor left for the shop. Free text throughout; there
/// is no delivery endpoint, so messages simply accumulate in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Payload for leaving a new message.
#[derive(Debug, Clone)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}
