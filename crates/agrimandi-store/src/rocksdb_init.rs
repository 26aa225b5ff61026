//! RocksDB open helper.
//!
//! Opens the database with every entity partition's column family up front,
//! since the shared handle cannot create families after open.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use rocksdb::{Options, DB};

use agrimandi_commons::partitions;

/// Opens the marketplace database at a filesystem path.
pub struct RocksDbInit {
    path: PathBuf,
}

impl RocksDbInit {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Opens (creating if missing) the database with all entity column
    /// families.
    pub fn open(&self) -> Result<Arc<DB>> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, &self.path, partitions::ALL)?;
        Ok(Arc::new(db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_all_entity_partitions() {
        let dir = TempDir::new().unwrap();
        let db = RocksDbInit::new(dir.path()).open().unwrap();

        for name in partitions::ALL {
            assert!(db.cf_handle(name).is_some(), "missing partition {}", name);
        }
    }
}
