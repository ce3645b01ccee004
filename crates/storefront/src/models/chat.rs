//! Chat transcript message model for the advisory widget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tacworld_core::{ChatRole, MessageId};

/// A message in the advisor transcript.
///
/// The transcript is append-only; messages are never mutated or reordered
/// after they are recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: MessageId,
    /// Role of the message sender.
    pub role: ChatRole,
    /// Message text.
    pub text: String,
    /// When the message was recorded.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Record a message now.
    #[must_use]
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_serialization() {
        let message = ChatMessage::new(ChatRole::User, "Looking for an IWB rig");

        let json = serde_json::to_string(&message).expect("serialize");
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("Looking for an IWB rig"));
    }

    #[test]
    fn test_messages_have_distinct_ids() {
        let a = ChatMessage::new(ChatRole::User, "one");
        let b = ChatMessage::new(ChatRole::User, "one");
        assert_ne!(a.id, b.id);
    }
}
