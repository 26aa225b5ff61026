//! Mandi rate repository.

use std::sync::Arc;

use agrimandi_commons::{partitions, MandiRate, RateId};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct MandiRateStore {
    backend: Arc<dyn StorageBackend>,
}

impl MandiRateStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn all(&self) -> Result<Vec<MandiRate>, StorageError> {
        self.scan_all()
    }

    /// Writes the seed set in one atomic batch.
    pub fn seed(&self, rates: Vec<MandiRate>) -> Result<usize, StorageError> {
        let entries: Vec<(RateId, MandiRate)> =
            rates.into_iter().map(|r| (r.id.clone(), r)).collect();
        let count = entries.len();
        self.batch_put(&entries)?;
        Ok(count)
    }
}

impl EntityStore<RateId, MandiRate> for MandiRateStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::MANDI_RATES
    }
}
