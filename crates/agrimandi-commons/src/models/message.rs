//! Chat messages and deterministic conversation identifiers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{MessageId, OrderId, UserId};
use crate::storage_key::StorageKey;

/// Identifier of the conversation between exactly two users.
///
/// Derived from the sorted pair of participant ids, so both parties arrive
/// at the same id no matter who sends first, and any two users share exactly
/// one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives the canonical conversation id for a pair of users.
    pub fn between(a: &UserId, b: &UserId) -> Self {
        let (lo, hi) = if a.as_str() <= b.as_str() { (a, b) } else { (b, a) };
        Self(format!("conv-{}-{}", lo, hi))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl StorageKey for ConversationId {
    fn storage_key(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}

/// Composite storage key `{conversationId}:{messageId}`.
///
/// Scanning with a `{conversationId}:` prefix yields one conversation;
/// marking a message read is a direct get on the full key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageKey {
    pub conversation_id: ConversationId,
    pub message_id: MessageId,
}

impl MessageKey {
    pub fn new(conversation_id: ConversationId, message_id: MessageId) -> Self {
        Self {
            conversation_id,
            message_id,
        }
    }

    /// Prefix covering every message in a conversation.
    pub fn conversation_prefix(conversation_id: &ConversationId) -> Vec<u8> {
        format!("{}:", conversation_id).into_bytes()
    }
}

impl StorageKey for MessageKey {
    fn storage_key(&self) -> Vec<u8> {
        format!("{}:{}", self.conversation_id, self.message_id).into_bytes()
    }
}

/// A single message between two users, optionally carrying a price offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub offer_price: Option<f64>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Storage key for this message.
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.conversation_id.clone(), self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_id_is_order_independent() {
        let a = UserId::new("user-a");
        let b = UserId::new("user-b");
        assert_eq!(ConversationId::between(&a, &b), ConversationId::between(&b, &a));
    }

    #[test]
    fn test_conversation_id_format() {
        let a = UserId::new("zz");
        let b = UserId::new("aa");
        assert_eq!(ConversationId::between(&a, &b).as_str(), "conv-aa-zz");
    }

    #[test]
    fn test_message_key_prefix_matches_full_key() {
        let conv = ConversationId::new("conv-aa-zz");
        let key = MessageKey::new(conv.clone(), MessageId::new("m1"));
        let prefix = MessageKey::conversation_prefix(&conv);
        assert!(key.storage_key().starts_with(&prefix));
    }
}
