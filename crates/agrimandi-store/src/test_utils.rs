//! Test utilities for agrimandi-store.
//!
//! Helpers for setting up throwaway RocksDB instances with minimal
//! boilerplate.

use std::sync::Arc;

use anyhow::Result;
use rocksdb::{Options, DB};
use tempfile::TempDir;

/// Test database wrapper that cleans up its directory on drop.
pub struct TestDb {
    /// RocksDB instance
    pub db: Arc<DB>,
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
}

impl TestDb {
    /// Creates a new test database with the specified column families.
    pub fn new(cf_names: &[&str]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, temp_dir.path(), cf_names)?;

        Ok(Self {
            db: Arc::new(db),
            temp_dir,
        })
    }

    /// Creates a test database with every marketplace partition.
    pub fn with_all_partitions() -> Result<Self> {
        Self::new(&agrimandi_commons::partitions::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_db() {
        let test_db = TestDb::new(&["listings"]).unwrap();
        assert!(test_db.db.cf_handle("listings").is_some());
    }

    #[test]
    fn test_with_all_partitions() {
        let test_db = TestDb::with_all_partitions().unwrap();
        assert!(test_db.db.cf_handle("users").is_some());
        assert!(test_db.db.cf_handle("disputes").is_some());
    }
}
