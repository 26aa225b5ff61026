//! Typed entity storage over the generic `StorageBackend`.
//!
//! `EntityStore<K, V>` gives each repository compile-time key safety: a
//! listing store only accepts `ListingId`s, the message store only accepts
//! full `MessageKey`s, and so on. Values serialize as JSON, matching the
//! original records' wire shape byte-for-byte in storage.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use agrimandi_commons::StorageKey;

use crate::storage_trait::{Operation, Partition, Result, StorageBackend, StorageError};

/// Trait for typed entity storage with type-safe keys.
///
/// ## Type Parameters
/// - `K`: key type implementing `StorageKey` (a typed id or composite key)
/// - `V`: entity type, `Serialize + Deserialize`
///
/// Implementors provide `backend()` and `partition()`; everything else has
/// a default implementation.
pub trait EntityStore<K, V>
where
    K: StorageKey,
    V: Serialize + for<'de> Deserialize<'de> + Send + Sync,
{
    /// Returns a reference to the storage backend.
    fn backend(&self) -> &Arc<dyn StorageBackend>;

    /// Returns the partition name for this entity family.
    fn partition(&self) -> &str;

    /// Serializes an entity to bytes (JSON).
    fn serialize(&self, entity: &V) -> Result<Vec<u8>> {
        serde_json::to_vec(entity).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Deserializes bytes to an entity.
    fn deserialize(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Stores an entity under the given key, replacing any previous value.
    fn put(&self, key: &K, entity: &V) -> Result<()> {
        let partition = Partition::new(self.partition());
        let value = self.serialize(entity)?;
        self.backend().put(&partition, &key.storage_key(), &value)
    }

    /// Retrieves an entity by key. `Ok(None)` when absent.
    fn get(&self, key: &K) -> Result<Option<V>> {
        let partition = Partition::new(self.partition());
        match self.backend().get(&partition, &key.storage_key())? {
            Some(bytes) => Ok(Some(self.deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Deletes an entity by key (idempotent).
    fn delete(&self, key: &K) -> Result<()> {
        let partition = Partition::new(self.partition());
        self.backend().delete(&partition, &key.storage_key())
    }

    /// Stores multiple entities atomically in one write batch.
    fn batch_put(&self, entries: &[(K, V)]) -> Result<()> {
        let partition = Partition::new(self.partition());
        let operations: Result<Vec<Operation>> = entries
            .iter()
            .map(|(key, entity)| {
                let value = self.serialize(entity)?;
                Ok(Operation::Put {
                    partition: partition.clone(),
                    key: key.storage_key(),
                    value,
                })
            })
            .collect();

        self.backend().batch(operations?)
    }

    /// Scans entities whose keys start with the given byte prefix.
    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<V>> {
        let partition = Partition::new(self.partition());
        let iter = self.backend().scan(&partition, Some(prefix), None)?;

        let mut results = Vec::new();
        for (_, value_bytes) in iter {
            results.push(self.deserialize(&value_bytes)?);
        }
        Ok(results)
    }

    /// Scans every entity in the partition.
    ///
    /// Loads the whole family into memory; the marketplace's record volumes
    /// are small enough that the full-scan handlers stay within bounds.
    fn scan_all(&self) -> Result<Vec<V>> {
        let partition = Partition::new(self.partition());
        let iter = self.backend().scan(&partition, None, None)?;

        let mut results = Vec::new();
        for (_, value_bytes) in iter {
            results.push(self.deserialize(&value_bytes)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Fruit {
        name: String,
        price: f64,
    }

    struct FruitStore {
        backend: Arc<dyn StorageBackend>,
    }

    impl EntityStore<String, Fruit> for FruitStore {
        fn backend(&self) -> &Arc<dyn StorageBackend> {
            &self.backend
        }

        fn partition(&self) -> &str {
            "fruits"
        }
    }

    fn store() -> FruitStore {
        FruitStore {
            backend: Arc::new(MemoryBackend::with_partitions(&["fruits"])),
        }
    }

    #[test]
    fn test_typed_round_trip() {
        let store = store();
        let mango = Fruit {
            name: "mango".to_string(),
            price: 80.0,
        };

        store.put(&"f1".to_string(), &mango).unwrap();
        assert_eq!(store.get(&"f1".to_string()).unwrap(), Some(mango));
        assert_eq!(store.get(&"f2".to_string()).unwrap(), None);
    }

    #[test]
    fn test_scan_prefix_and_all() {
        let store = store();
        for (key, name) in [("a:1", "apple"), ("a:2", "apricot"), ("b:1", "banana")] {
            store
                .put(
                    &key.to_string(),
                    &Fruit {
                        name: name.to_string(),
                        price: 1.0,
                    },
                )
                .unwrap();
        }

        let a_fruits = store.scan_prefix(b"a:").unwrap();
        assert_eq!(a_fruits.len(), 2);
        assert_eq!(store.scan_all().unwrap().len(), 3);
    }

    #[test]
    fn test_batch_put_writes_everything() {
        let store = store();
        let entries = vec![
            (
                "f1".to_string(),
                Fruit {
                    name: "fig".to_string(),
                    price: 5.0,
                },
            ),
            (
                "f2".to_string(),
                Fruit {
                    name: "guava".to_string(),
                    price: 3.0,
                },
            ),
        ];

        store.batch_put(&entries).unwrap();
        assert_eq!(store.scan_all().unwrap().len(), 2);
    }
}
