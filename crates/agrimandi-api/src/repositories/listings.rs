//! Listing repository.

use std::sync::Arc;

use agrimandi_commons::{partitions, Listing, ListingId, UserId};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct ListingStore {
    backend: Arc<dyn StorageBackend>,
}

impl ListingStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn all(&self) -> Result<Vec<Listing>, StorageError> {
        self.scan_all()
    }

    /// All of one supplier's listings, any status.
    pub fn by_supplier(&self, supplier_id: &UserId) -> Result<Vec<Listing>, StorageError> {
        Ok(self
            .scan_all()?
            .into_iter()
            .filter(|l| &l.supplier_id == supplier_id)
            .collect())
    }
}

impl EntityStore<ListingId, Listing> for ListingStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::LISTINGS
    }
}
