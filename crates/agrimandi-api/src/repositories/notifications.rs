//! Notification repository, scoped per user like the watchlist.

use std::sync::Arc;

use agrimandi_commons::{partitions, Notification, NotificationKey, UserId};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct NotificationStore {
    backend: Arc<dyn StorageBackend>,
}

impl NotificationStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// One user's notifications, newest first.
    pub fn for_user(&self, user_id: &UserId) -> Result<Vec<Notification>, StorageError> {
        let mut notifications = self.scan_prefix(&NotificationKey::user_prefix(user_id))?;
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }
}

impl EntityStore<NotificationKey, Notification> for NotificationStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::NOTIFICATIONS
    }
}
