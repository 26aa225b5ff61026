//! RocksDB implementation of the `StorageBackend` trait.
//!
//! Maps the generic partition concept to RocksDB column families. Column
//! families must exist when the database is opened (see `RocksDbInit`);
//! `create_partition` only verifies presence, since the `DB` handle is
//! shared behind an `Arc` and cannot create families after open.

use std::sync::Arc;

use rocksdb::{ColumnFamily, Direction, IteratorMode, WriteBatch, DB};

use crate::storage_trait::{
    KvIterator, Operation, Partition, Result, StorageBackend, StorageError,
};

/// RocksDB-backed storage, one column family per partition.
pub struct RocksDbBackend {
    db: Arc<DB>,
}

impl RocksDbBackend {
    /// Creates a new backend over an already-opened database handle.
    pub fn new(db: Arc<DB>) -> Self {
        Self { db }
    }

    fn get_cf(&self, partition: &Partition) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(partition.name())
            .ok_or_else(|| StorageError::PartitionNotFound(partition.name().to_string()))
    }
}

impl StorageBackend for RocksDbBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let cf = self.get_cf(partition)?;
        self.db
            .get_cf(cf, key)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let cf = self.get_cf(partition)?;
        self.db
            .put_cf(cf, key, value)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let cf = self.get_cf(partition)?;
        self.db
            .delete_cf(cf, key)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn batch(&self, operations: Vec<Operation>) -> Result<()> {
        let mut batch = WriteBatch::default();

        for op in operations {
            match op {
                Operation::Put {
                    partition,
                    key,
                    value,
                } => {
                    let cf = self.get_cf(&partition)?;
                    batch.put_cf(cf, key, value);
                }
                Operation::Delete { partition, key } => {
                    let cf = self.get_cf(&partition)?;
                    batch.delete_cf(cf, key);
                }
            }
        }

        self.db
            .write(batch)
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn scan(
        &self,
        partition: &Partition,
        prefix: Option<&[u8]>,
        limit: Option<usize>,
    ) -> Result<KvIterator<'_>> {
        let cf = self.get_cf(partition)?;

        let prefix_vec = prefix.map(|p| p.to_vec());
        let iter_mode = match &prefix_vec {
            Some(p) => IteratorMode::From(p.as_slice(), Direction::Forward),
            None => IteratorMode::Start,
        };

        let inner = self.db.iterator_cf(cf, iter_mode);

        let iter = inner
            .filter_map(|item| item.ok())
            .map(|(k, v)| (k.to_vec(), v.to_vec()))
            .take_while(move |(k, _)| match &prefix_vec {
                Some(p) => k.starts_with(p),
                None => true,
            })
            .take(limit.unwrap_or(usize::MAX));

        Ok(Box::new(iter))
    }

    fn partition_exists(&self, partition: &Partition) -> bool {
        self.db.cf_handle(partition.name()).is_some()
    }

    fn create_partition(&self, partition: &Partition) -> Result<()> {
        // Column families are created at open time by RocksDbInit; the
        // shared handle cannot add families afterwards.
        if self.partition_exists(partition) {
            Ok(())
        } else {
            Err(StorageError::Unsupported(format!(
                "column family '{}' must be created at database open",
                partition.name()
            )))
        }
    }
}
