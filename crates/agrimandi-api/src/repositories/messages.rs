//! Message repository.
//!
//! Keys are `{conversationId}:{messageId}`, so one conversation is one
//! prefix scan and a single message is a direct composite-key get.

use std::sync::Arc;

use agrimandi_commons::{partitions, ConversationId, Message, MessageKey, UserId};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct MessageStore {
    backend: Arc<dyn StorageBackend>,
}

impl MessageStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Every message in one conversation, ascending by creation time.
    pub fn conversation(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<Message>, StorageError> {
        let mut messages =
            self.scan_prefix(&MessageKey::conversation_prefix(conversation_id))?;
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }

    /// Every message the user participates in, across all conversations.
    ///
    /// A full partition scan; the conversation list endpoint groups the
    /// result in memory.
    pub fn for_participant(&self, user_id: &UserId) -> Result<Vec<Message>, StorageError> {
        Ok(self
            .scan_all()?
            .into_iter()
            .filter(|m| &m.sender_id == user_id || &m.receiver_id == user_id)
            .collect())
    }

    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.scan_all()?.len())
    }
}

impl EntityStore<MessageKey, Message> for MessageStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::MESSAGES
    }
}
