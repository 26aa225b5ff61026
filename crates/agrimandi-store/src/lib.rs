//! # agrimandi-store
//!
//! Key-value store abstraction for the marketplace. This crate isolates all
//! direct RocksDB interactions so the rest of the workspace only ever talks
//! to the `StorageBackend` trait.
//!
//! ## Architecture
//!
//! ```text
//! agrimandi-api (handlers, typed repositories)
//!     ↓
//! EntityStore<K, V>        ← typed entity CRUD (entity_store.rs)
//!     ↓
//! StorageBackend           ← generic K/V operations (storage_trait.rs)
//!     ↓
//! RocksDB / in-memory      ← actual storage implementation
//! ```
//!
//! One partition per entity family; the RocksDB backend maps a partition to
//! a column family, the in-memory backend to a `BTreeMap` namespace.

pub mod entity_store;
pub mod memory;
pub mod rocksdb_impl;
pub mod rocksdb_init;
pub mod storage_trait;
pub mod test_utils;

pub use entity_store::EntityStore;
pub use memory::MemoryBackend;
pub use rocksdb_impl::RocksDbBackend;
pub use rocksdb_init::RocksDbInit;
pub use storage_trait::{KvIterator, Operation, Partition, StorageBackend, StorageError};
