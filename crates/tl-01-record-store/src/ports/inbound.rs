//! # Inbound Ports (Driving Ports)
//!
//! The per-type record contract offered to subsystems that own records.
//!
//! Every method takes the backend explicitly so a caller can run several
//! table operations under one lock.

use crate::domain::errors::RecordStoreError;
use crate::domain::index::KeyIndex;
use crate::domain::record::StoredRecord;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use shared_types::entities::FieldMap;

/// Indexed record contract for record type `T`.
pub trait IndexedRecordApi<T: StoredRecord> {
    /// Store a new record and append its key to the index.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if a live record is already stored under the key.
    fn create<S: KeyValueStore + ?Sized>(&self, store: &mut S, record: &T)
        -> Result<(), RecordStoreError>;

    /// The live record under `key`, if any.
    fn find<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str)
        -> Result<Option<T>, RecordStoreError>;

    /// The live record under `key`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no live record exists.
    fn get<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> Result<T, RecordStoreError>;

    /// The persisted bytes of the live record under `key`.
    fn get_raw<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str)
        -> Result<Vec<u8>, RecordStoreError>;

    /// Load a live record, apply `apply`, and return the result unwritten.
    ///
    /// The record's key must not change.
    fn prepare_update<S, E, F>(&self, store: &S, key: &str, apply: F) -> Result<T, E>
    where
        S: KeyValueStore + ?Sized,
        E: From<RecordStoreError>,
        F: FnOnce(&mut T) -> Result<(), E>;

    /// `prepare_update` followed by a write. The index is untouched.
    fn update_with<S, E, F>(&self, store: &mut S, key: &str, apply: F) -> Result<T, E>
    where
        S: KeyValueStore + ?Sized,
        E: From<RecordStoreError>,
        F: FnOnce(&mut T) -> Result<(), E>;

    /// Merge `fields` into the live record under `key` and rewrite it.
    fn update_fields<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        key: &str,
        fields: &FieldMap,
    ) -> Result<T, RecordStoreError>;

    /// Remove the record and the first index occurrence of `key`.
    ///
    /// Succeeds when nothing was stored.
    fn delete<S: KeyValueStore + ?Sized>(&self, store: &mut S, key: &str)
        -> Result<(), RecordStoreError>;

    /// Every indexed record whose `field` equals `value` exactly, in index order.
    fn query_by_field<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        field: &str,
        value: &str,
    ) -> Result<Vec<T>, RecordStoreError>;

    /// Every indexed record, in index order.
    fn query_all<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Vec<T>, RecordStoreError>;

    /// The decoded key index (empty if never written).
    fn index<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<KeyIndex, RecordStoreError>;

    /// A put that overwrites the index with an empty list, for inclusion in
    /// a larger batch.
    fn reset_index_op(&self) -> Result<BatchOperation, RecordStoreError>;

    /// Encode `record` as a put for inclusion in a larger batch.
    fn put_op(&self, record: &T) -> Result<BatchOperation, RecordStoreError>;
}
