//! Review repository, keyed under the reviewee.

use std::sync::Arc;

use agrimandi_commons::{partitions, Review, ReviewKey, UserId};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct ReviewStore {
    backend: Arc<dyn StorageBackend>,
}

impl ReviewStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// All reviews targeting one user.
    pub fn for_reviewee(&self, reviewee_id: &UserId) -> Result<Vec<Review>, StorageError> {
        self.scan_prefix(&ReviewKey::reviewee_prefix(reviewee_id))
    }
}

impl EntityStore<ReviewKey, Review> for ReviewStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::REVIEWS
    }
}
