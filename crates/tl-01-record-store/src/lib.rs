//! # Indexed Record Store (tl-01)
//!
//! Typed records stored under unique keys in an opaque byte-oriented
//! key-value backend, with one ordered key index per record type.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Index Membership | After a create the key appears exactly once in its index; after a delete, zero times |
//! | 2 | Authoritative Index | Queries enumerate the index, never the backend |
//! | 3 | Live Detection | A record is live only if its decoded key field equals the key it is stored under |
//! | 4 | Atomic Writes | Record and index are written in one batch |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Key index, record trait, codec, errors
//! - `ports/` - Inbound record contract, outbound `KeyValueStore`
//! - `adapters/` - In-memory and file-backed stores
//! - `service.rs` - `RecordTable<T>` and `SingletonRecord<T>`
//!
//! ## Usage
//!
//! ```ignore
//! use tl_01_record_store::{InMemoryKVStore, IndexedRecordApi, RecordTable};
//!
//! let mut store = InMemoryKVStore::new();
//! let table = RecordTable::<FraudEntry>::new();
//! table.create(&mut store, &entry)?;
//! let matches = table.query_by_field(&store, "fraudName", "EvilCo")?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use parking_lot::Mutex;
use std::sync::Arc;

pub use adapters::{FileBackedKVStore, InMemoryKVStore};
pub use domain::errors::{KVStoreError, RecordStoreError};
pub use domain::index::KeyIndex;
pub use domain::record::{RecordCodec, StoredRecord};
pub use ports::inbound::IndexedRecordApi;
pub use ports::outbound::{BatchOperation, KeyValueStore};
pub use service::{RecordTable, SingletonRecord};

/// A backend shared by several subsystems.
///
/// Each subsystem operation holds the lock for its whole read-check-write
/// sequence.
pub type SharedStore<S> = Arc<Mutex<S>>;

/// Wrap a backend for sharing.
pub fn shared<S: KeyValueStore>(store: S) -> SharedStore<S> {
    Arc::new(Mutex::new(store))
}
