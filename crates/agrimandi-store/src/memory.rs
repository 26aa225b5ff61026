//! In-memory implementation of the `StorageBackend` trait.
//!
//! Partitions map to `BTreeMap` namespaces, which gives the same byte-wise
//! key ordering as RocksDB. Used by the integration tests and available as
//! a dev backend; data lives only as long as the process.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use crate::storage_trait::{
    KvIterator, Operation, Partition, Result, StorageBackend, StorageError,
};

type Namespace = BTreeMap<Vec<u8>, Vec<u8>>;

/// Thread-safe in-memory storage.
#[derive(Default)]
pub struct MemoryBackend {
    partitions: RwLock<HashMap<String, Namespace>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with every marketplace partition ready, mirroring
    /// what `RocksDbInit::open` does for the persistent backend.
    pub fn with_partitions(names: &[&str]) -> Self {
        let backend = Self::new();
        {
            let mut guard = backend.partitions.write();
            for name in names {
                guard.entry(name.to_string()).or_default();
            }
        }
        backend
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let guard = self.partitions.read();
        let ns = guard
            .get(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))?;
        Ok(ns.get(key).cloned())
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let mut guard = self.partitions.write();
        let ns = guard
            .get_mut(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))?;
        ns.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let mut guard = self.partitions.write();
        let ns = guard
            .get_mut(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))?;
        ns.remove(key);
        Ok(())
    }

    fn batch(&self, operations: Vec<Operation>) -> Result<()> {
        // Single write lock for the whole batch makes it atomic with
        // respect to readers.
        let mut guard = self.partitions.write();
        for op in &operations {
            let name = match op {
                Operation::Put { partition, .. } | Operation::Delete { partition, .. } => {
                    partition.name()
                }
            };
            if !guard.contains_key(name) {
                return Err(StorageError::PartitionNotFound(name.to_string()));
            }
        }
        for op in operations {
            match op {
                Operation::Put {
                    partition,
                    key,
                    value,
                } => {
                    guard.get_mut(partition.name()).unwrap().insert(key, value);
                }
                Operation::Delete { partition, key } => {
                    guard.get_mut(partition.name()).unwrap().remove(&key);
                }
            }
        }
        Ok(())
    }

    fn scan(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<KvIterator<'_>> {
        let guard = self.partitions.read();
        let ns = guard
            .get(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))?;

        let prefix = prefix.map(|p| p.to_vec());
        let entries: Vec<(Vec<u8>, Vec<u8>)> = ns
            .iter()
            .filter(|(k, _)| match &prefix {
                Some(p) => k.starts_with(p.as_slice()),
                None => true,
            })
            .take(limit.unwrap_or(usize::MAX))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Box::new(entries.into_iter()))
    }

    fn partition_exists(&self, partition: &Partition) -> bool {
        self.partitions.read().contains_key(partition.name())
    }

    fn create_partition(&self, partition: &Partition) -> Result<()> {
        self.partitions
            .write()
            .entry(partition.name().to_string())
            .or_default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> MemoryBackend {
        MemoryBackend::with_partitions(&["orders"])
    }

    #[test]
    fn test_put_get_delete() {
        let b = backend();
        let p = Partition::new("orders");

        b.put(&p, b"o1", b"x").unwrap();
        assert_eq!(b.get(&p, b"o1").unwrap(), Some(b"x".to_vec()));

        b.delete(&p, b"o1").unwrap();
        assert_eq!(b.get(&p, b"o1").unwrap(), None);
    }

    #[test]
    fn test_scan_is_ordered_and_prefix_filtered() {
        let b = backend();
        let p = Partition::new("orders");
        b.put(&p, b"a:2", b"2").unwrap();
        b.put(&p, b"a:1", b"1").unwrap();
        b.put(&p, b"b:1", b"3").unwrap();

        let keys: Vec<Vec<u8>> = b.scan(&p, Some(b"a:"), None).unwrap().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![b"a:1".to_vec(), b"a:2".to_vec()]);
    }

    #[test]
    fn test_scan_limit() {
        let b = backend();
        let p = Partition::new("orders");
        for i in 0..5u8 {
            b.put(&p, &[i], b"v").unwrap();
        }
        assert_eq!(b.scan(&p, None, Some(2)).unwrap().count(), 2);
    }

    #[test]
    fn test_missing_partition() {
        let b = backend();
        let err = b.get(&Partition::new("users"), b"k").unwrap_err();
        assert!(matches!(err, StorageError::PartitionNotFound(_)));
    }
}
