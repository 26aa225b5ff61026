//! Order repository.

use std::sync::Arc;

use agrimandi_commons::{partitions, Order, OrderId, UserId};
use agrimandi_store::{EntityStore, StorageBackend, StorageError};

pub struct OrderStore {
    backend: Arc<dyn StorageBackend>,
}

impl OrderStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn all(&self) -> Result<Vec<Order>, StorageError> {
        self.scan_all()
    }

    /// Orders visible to a user: those where they are buyer or supplier.
    pub fn for_party(&self, user_id: &UserId) -> Result<Vec<Order>, StorageError> {
        Ok(self
            .scan_all()?
            .into_iter()
            .filter(|o| &o.buyer_id == user_id || &o.supplier_id == user_id)
            .collect())
    }
}

impl EntityStore<OrderId, Order> for OrderStore {
    fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    fn partition(&self) -> &str {
        partitions::ORDERS
    }
}
