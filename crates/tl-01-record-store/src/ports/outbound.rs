//! # Outbound Ports
//!
//! What the record store needs from whatever holds its bytes.

use crate::domain::errors::KVStoreError;

/// Byte-keyed storage backing every record table.
///
/// Implemented by `InMemoryKVStore`, `FileBackedKVStore` and, behind the
/// runtime's `rocksdb` feature, `RocksDbStore`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// Delete a key. Deleting an absent key succeeds.
    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError>;

    /// Apply `operations` in order as one unit. On error nothing is visible.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;
}

/// One step of an [`KeyValueStore::atomic_batch_write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    Put { key: Vec<u8>, value: Vec<u8> },
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }
}
