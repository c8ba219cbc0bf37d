//! # Storage Backends
//!
//! Opens the configured `KeyValueStore`. The in-memory store needs nothing;
//! the file and RocksDB stores live under `data_dir` and hold its lock.
//!
//! Enable the `rocksdb` feature for the RocksDB backend:
//!
//! ```toml
//! ledger-runtime = { path = "...", features = ["rocksdb"] }
//! ```

pub mod lock;
#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

pub use lock::{DataDirLock, LockError};
#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::RocksDbStore;

use crate::config::{StorageBackend, StorageConfig};
use thiserror::Error;
use tl_01_record_store::{
    BatchOperation, FileBackedKVStore, InMemoryKVStore, KVStoreError, KeyValueStore,
};
use tracing::info;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Lock(#[from] LockError),

    #[error("Failed to open {backend:?} store: {source}")]
    Open {
        backend: StorageBackend,
        source: KVStoreError,
    },

    #[error("Storage backend {0:?} is not compiled in")]
    Unavailable(StorageBackend),
}

/// The backend selected at start-up.
pub enum LedgerStore {
    Memory(InMemoryKVStore),
    File(FileBackedKVStore),
    #[cfg(feature = "rocksdb")]
    RocksDb(RocksDbStore),
}

impl LedgerStore {
    pub fn backend(&self) -> StorageBackend {
        match self {
            LedgerStore::Memory(_) => StorageBackend::Memory,
            LedgerStore::File(_) => StorageBackend::File,
            #[cfg(feature = "rocksdb")]
            LedgerStore::RocksDb(_) => StorageBackend::RocksDb,
        }
    }

    fn inner(&self) -> &dyn KeyValueStore {
        match self {
            LedgerStore::Memory(s) => s,
            LedgerStore::File(s) => s,
            #[cfg(feature = "rocksdb")]
            LedgerStore::RocksDb(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn KeyValueStore {
        match self {
            LedgerStore::Memory(s) => s,
            LedgerStore::File(s) => s,
            #[cfg(feature = "rocksdb")]
            LedgerStore::RocksDb(s) => s,
        }
    }
}

impl KeyValueStore for LedgerStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.inner().get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.inner_mut().put(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KVStoreError> {
        self.inner_mut().delete(key)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.inner_mut().atomic_batch_write(operations)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        self.inner().exists(key)
    }
}

/// An opened backend and, for on-disk backends, the lock on its directory.
pub struct OpenedStore {
    pub store: LedgerStore,
    pub lock: Option<DataDirLock>,
}

/// Open the backend named by `config`.
pub fn open_store(config: &StorageConfig) -> Result<OpenedStore, StorageError> {
    let opened = match config.backend {
        StorageBackend::Memory => OpenedStore {
            store: LedgerStore::Memory(InMemoryKVStore::new()),
            lock: None,
        },
        StorageBackend::File => {
            let lock = DataDirLock::acquire(&config.data_dir)?;
            let path = config.data_dir.join(&config.file_name);
            let store = FileBackedKVStore::open(&path).map_err(|source| StorageError::Open {
                backend: StorageBackend::File,
                source,
            })?;
            OpenedStore {
                store: LedgerStore::File(store),
                lock: Some(lock),
            }
        }
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb => {
            let lock = DataDirLock::acquire(&config.data_dir)?;
            let store = RocksDbStore::open(config.data_dir.join("rocksdb"), config.sync_writes)
                .map_err(|source| StorageError::Open {
                    backend: StorageBackend::RocksDb,
                    source,
                })?;
            OpenedStore {
                store: LedgerStore::RocksDb(store),
                lock: Some(lock),
            }
        }
        #[cfg(not(feature = "rocksdb"))]
        StorageBackend::RocksDb => return Err(StorageError::Unavailable(StorageBackend::RocksDb)),
    };

    info!(
        backend = ?opened.store.backend(),
        data_dir = %config.data_dir.display(),
        "[runtime] Storage opened"
    );
    Ok(opened)
}
