//! # Storage Adapters
//!
//! - `memory`: `InMemoryKVStore` (HashMap)
//! - `file`: `FileBackedKVStore` (snapshot file)
//!
//! The RocksDB adapter lives in `ledger-runtime` behind its `rocksdb` feature.

mod file;
mod memory;

pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;
