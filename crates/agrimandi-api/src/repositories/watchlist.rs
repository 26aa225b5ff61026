//! Watchlist repository.
//!
//! Handlers must only ever reach this store with keys built from the
//! authenticated caller's id; the `{userId}:{watchId}` key shape is the
//! ownership check.

use std::sync::Arc;

use agrimandi_commons::{partitions, UserId, WatchlistItem, WatchlistKey};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct WatchlistStore {
    backend: Arc<dyn StorageBackend>,
}

impl WatchlistStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// One user's watchlist, scanned under their own prefix only.
    pub fn for_user(&self, user_id: &UserId) -> Result<Vec<WatchlistItem>, StorageError> {
        self.scan_prefix(&WatchlistKey::user_prefix(user_id))
    }
}

impl EntityStore<WatchlistKey, WatchlistItem> for WatchlistStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::WATCHLIST
    }
}
