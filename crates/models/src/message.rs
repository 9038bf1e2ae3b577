use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{new_id, now_iso, Extra};

/// Sender or recipient reference embedded in a message.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Party {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Party {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    pub fn system() -> Self { Self::new("system", "System") }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sender: Party,
    #[serde(default)]
    pub recipient: Party,
    pub content: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

crate::impl_record!(Message, "messages");

impl Message {
    /// Unread message stamped now.
    pub fn notification(sender: Party, recipient: Party, content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            sender,
            recipient,
            content: Some(content.into()),
            timestamp: now_iso(),
            read: false,
            extra: Extra::new(),
        }
    }
}

/// Body of `POST /api/messages`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewMessage {
    pub sender: Party,
    pub recipient: Party,
    pub content: String,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.recipient.id.trim().is_empty() {
            return Err(ModelError::invalid("recipient.id is required"));
        }
        Ok(())
    }

    pub fn into_record(self) -> Message {
        Message::notification(self.sender, self.recipient, self.content)
    }
}
