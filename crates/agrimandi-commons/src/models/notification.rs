//! Per-user notifications, scoped by storage key like the watchlist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{NotificationId, UserId};
use crate::storage_key::StorageKey;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Order,
    Alert,
    Price,
}

/// Composite storage key `{userId}:{notificationId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationKey {
    pub user_id: UserId,
    pub notification_id: NotificationId,
}

impl NotificationKey {
    pub fn new(user_id: UserId, notification_id: NotificationId) -> Self {
        Self {
            user_id,
            notification_id,
        }
    }

    /// Prefix covering one user's notifications.
    pub fn user_prefix(user_id: &UserId) -> Vec<u8> {
        format!("{}:", user_id).into_bytes()
    }
}

impl StorageKey for NotificationKey {
    fn storage_key(&self) -> Vec<u8> {
        format!("{}:{}", self.user_id, self.notification_id).into_bytes()
    }
}

/// A notification delivered to exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn key(&self) -> NotificationKey {
        NotificationKey::new(self.user_id.clone(), self.id.clone())
    }

    /// Builds the notification enqueued when a user receives a message.
    pub fn new_message(receiver: UserId) -> Self {
        Self {
            id: NotificationId::generate(),
            user_id: receiver,
            kind: NotificationKind::Message,
            title: "New Message".to_string(),
            message: "You have a new message".to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }
}
