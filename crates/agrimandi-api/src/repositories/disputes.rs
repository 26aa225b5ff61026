//! Dispute repository.

use std::sync::Arc;

use agrimandi_commons::{partitions, Dispute, DisputeId, UserId};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct DisputeStore {
    backend: Arc<dyn StorageBackend>,
}

impl DisputeStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn all(&self) -> Result<Vec<Dispute>, StorageError> {
        self.scan_all()
    }

    /// Disputes raised by one user; the non-admin view.
    pub fn raised_by(&self, user_id: &UserId) -> Result<Vec<Dispute>, StorageError> {
        Ok(self
            .scan_all()?
            .into_iter()
            .filter(|d| &d.raised_by == user_id)
            .collect())
    }
}

impl EntityStore<DisputeId, Dispute> for DisputeStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::DISPUTES
    }
}
