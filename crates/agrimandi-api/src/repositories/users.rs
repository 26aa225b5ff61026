//! User profile repository.

use std::sync::Arc;

use agrimandi_commons::{partitions, User, UserId};
use agrimandi_store::{EntityStore, StorageBackend};

pub struct UserStore {
    backend: Arc<dyn StorageBackend>,
}

impl UserStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Every user profile; admin dashboards and analytics only.
    pub fn all(&self) -> Result<Vec<User>, agrimandi_store::StorageError> {
        self.scan_all()
    }
}

impl EntityStore<UserId, User> for UserStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::USERS
    }
}
