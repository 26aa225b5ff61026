//! Messaging handlers.
//!
//! One conversation per user pair, identified deterministically so both
//! sides address the same thread. Sending a message also enqueues a
//! notification for the receiver.

use std::collections::HashMap;

use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::info;

use agrimandi_commons::{ConversationId, Message, MessageId, MessageKey, Notification};
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::messages::{
    ConversationView, ConversationsResponse, MarkReadRequest, MessageResponse, MessagesQuery,
    MessagesResponse, SendMessageRequest,
};
use crate::state::AppState;

/// GET /v1/api/messages - one thread when `conversationId` is given,
/// otherwise the caller's conversation list.
#[get("/messages")]
pub async fn list_messages(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<MessagesQuery>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;

    if let Some(conversation_id) = &query.conversation_id {
        let messages = state.messages.conversation(conversation_id)?;
        return Ok(HttpResponse::Ok().json(MessagesResponse { messages }));
    }

    let mut threads: HashMap<ConversationId, Vec<Message>> = HashMap::new();
    for message in state.messages.for_participant(&identity.user_id)? {
        threads
            .entry(message.conversation_id.clone())
            .or_default()
            .push(message);
    }

    let mut conversations: Vec<ConversationView> = threads
        .into_iter()
        .map(|(id, messages)| ConversationView::build(id, messages, &identity.user_id))
        .collect();
    conversations.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));

    Ok(HttpResponse::Ok().json(ConversationsResponse { conversations }))
}

/// POST /v1/api/messages - send a message, notifying the receiver.
#[post("/messages")]
pub async fn send_message(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<SendMessageRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let body = body.into_inner();
    body.validate()?;

    let conversation_id = body
        .conversation_id
        .unwrap_or_else(|| ConversationId::between(&identity.user_id, &body.receiver_id));

    let message = Message {
        id: MessageId::generate(),
        conversation_id,
        sender_id: identity.user_id.clone(),
        receiver_id: body.receiver_id.clone(),
        content: body.content,
        order_id: body.order_id,
        offer_price: body.offer_price,
        read: false,
        created_at: Utc::now(),
    };

    state.messages.put(&message.key(), &message)?;

    let notification = Notification::new_message(body.receiver_id);
    state.notifications.put(&notification.key(), &notification)?;

    info!(
        "message {} sent in {} by {}",
        message.id, message.conversation_id, identity.user_id
    );

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

/// PATCH /v1/api/messages/{id}/read - receiver marks a message read.
///
/// The body carries the conversation id, so the lookup is a direct
/// composite-key get rather than a partition scan.
#[patch("/messages/{id}/read")]
pub async fn mark_message_read(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<MarkReadRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let key = MessageKey::new(
        body.into_inner().conversation_id,
        MessageId::new(path.into_inner()),
    );

    let mut message = state
        .messages
        .get(&key)?
        .ok_or_else(|| ApiError::not_found("Message not found"))?;

    if message.receiver_id != identity.user_id {
        return Err(ApiError::forbidden("Forbidden - not your message"));
    }

    message.read = true;
    state.messages.put(&key, &message)?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}
