//! Messaging endpoint payloads.

use serde::{Deserialize, Serialize};

use agrimandi_commons::{ConversationId, Message, OrderId, UserId};

use crate::error::{ApiError, ApiResult};

/// Query of `GET /messages`; with a conversation id the endpoint returns
/// that thread, without one it returns the caller's conversation list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
    pub conversation_id: Option<ConversationId>,
}

/// Body of `POST /messages`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub receiver_id: UserId,
    pub content: String,
    pub conversation_id: Option<ConversationId>,
    pub order_id: Option<OrderId>,
    pub offer_price: Option<f64>,
}

impl SendMessageRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.receiver_id.as_str().trim().is_empty() || self.content.trim().is_empty() {
            return Err(ApiError::validation("Receiver and content required"));
        }
        Ok(())
    }
}

/// Body of `PATCH /messages/{id}/read`.
///
/// The client already knows the conversation id, which makes the lookup a
/// direct composite-key get instead of a scan over every message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub conversation_id: ConversationId,
}

/// One entry in the caller's conversation list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub conversation_id: ConversationId,
    pub last_message: Message,
    pub unread_count: usize,
    /// Full thread, newest first.
    pub messages: Vec<Message>,
}

impl ConversationView {
    /// Builds the view for one conversation's messages from the caller's
    /// perspective. `messages` must be non-empty.
    pub fn build(
        conversation_id: ConversationId,
        mut messages: Vec<Message>,
        caller: &UserId,
    ) -> Self {
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let unread_count = messages
            .iter()
            .filter(|m| !m.read && &m.receiver_id == caller)
            .count();
        Self {
            conversation_id,
            last_message: messages[0].clone(),
            unread_count,
            messages,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: Message,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<ConversationView>,
}
