//! # Record Tables
//!
//! `RecordTable<T>` implements the indexed record contract for one record
//! type. It holds no state of its own: the backend is passed to every call.
//! `SingletonRecord<T>` stores a single unindexed value under a fixed key.

use crate::domain::errors::RecordStoreError;
use crate::domain::index::KeyIndex;
use crate::domain::record::{RecordCodec, StoredRecord};
use crate::ports::inbound::IndexedRecordApi;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::entities::FieldMap;
use std::marker::PhantomData;
use tracing::{debug, info};

/// Indexed storage for records of type `T`.
pub struct RecordTable<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T: StoredRecord> RecordTable<T> {
    pub const fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }

    fn index_key() -> &'static str {
        T::KIND.index_key()
    }

    fn storage_key(key: &str) -> String {
        T::KIND.storage_key(key)
    }

    fn index_op(index: &KeyIndex) -> Result<BatchOperation, RecordStoreError> {
        Ok(BatchOperation::put(
            Self::index_key(),
            RecordCodec::encode(index)?,
        ))
    }

    fn not_found(key: &str) -> RecordStoreError {
        RecordStoreError::NotFound {
            kind: T::KIND,
            key: key.to_string(),
        }
    }

    fn dangling(key: &str) -> RecordStoreError {
        RecordStoreError::DanglingIndexEntry {
            kind: T::KIND,
            key: key.to_string(),
        }
    }
}

impl<T: StoredRecord> Default for RecordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredRecord> IndexedRecordApi<T> for RecordTable<T> {
    fn create<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        record: &T,
    ) -> Result<(), RecordStoreError> {
        let key = record.key();
        if self.find(&*store, key)?.is_some() {
            return Err(RecordStoreError::AlreadyExists {
                kind: T::KIND,
                key: key.to_string(),
            });
        }

        let mut index = self.index(&*store)?;
        index.append(key);

        store.atomic_batch_write(vec![self.put_op(record)?, Self::index_op(&index)?])?;

        info!(kind = %T::KIND, key, indexed = index.len(), "[tl-01] Record created");
        Ok(())
    }

    fn find<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        key: &str,
    ) -> Result<Option<T>, RecordStoreError> {
        let Some(bytes) = store.get(Self::storage_key(key).as_bytes())? else {
            return Ok(None);
        };
        let record: T = RecordCodec::decode(key, &bytes)?;

        // Bytes whose own key field differs are not a live record.
        if record.key() != key {
            debug!(kind = %T::KIND, key, stored_key = record.key(), "[tl-01] Key mismatch, treating as absent");
            return Ok(None);
        }
        Ok(Some(record))
    }

    fn get<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> Result<T, RecordStoreError> {
        self.find(store, key)?.ok_or_else(|| Self::not_found(key))
    }

    fn get_raw<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        key: &str,
    ) -> Result<Vec<u8>, RecordStoreError> {
        if self.find(store, key)?.is_none() {
            return Err(Self::not_found(key));
        }
        store
            .get(Self::storage_key(key).as_bytes())?
            .ok_or_else(|| Self::not_found(key))
    }

    fn prepare_update<S, E, F>(&self, store: &S, key: &str, apply: F) -> Result<T, E>
    where
        S: KeyValueStore + ?Sized,
        E: From<RecordStoreError>,
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let mut record = self.get(store, key)?;
        apply(&mut record)?;

        if record.key() != key {
            return Err(RecordStoreError::KeyChanged {
                kind: T::KIND,
                key: key.to_string(),
                attempted: record.key().to_string(),
            }
            .into());
        }
        Ok(record)
    }

    fn update_with<S, E, F>(&self, store: &mut S, key: &str, apply: F) -> Result<T, E>
    where
        S: KeyValueStore + ?Sized,
        E: From<RecordStoreError>,
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let record = self.prepare_update(&*store, key, apply)?;
        let bytes = RecordCodec::encode(&record)?;
        store
            .put(Self::storage_key(key).as_bytes(), &bytes)
            .map_err(RecordStoreError::from)?;

        info!(kind = %T::KIND, key, "[tl-01] Record updated");
        Ok(record)
    }

    fn update_fields<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        key: &str,
        fields: &FieldMap,
    ) -> Result<T, RecordStoreError> {
        let bytes = self.get_raw(&*store, key)?;
        let mut merged = RecordCodec::decode_fields(key, &bytes)?;
        merged.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));

        let record: T = RecordCodec::from_fields(key, &merged)?;
        if record.key() != key {
            return Err(RecordStoreError::KeyChanged {
                kind: T::KIND,
                key: key.to_string(),
                attempted: record.key().to_string(),
            });
        }

        store.put(Self::storage_key(key).as_bytes(), &RecordCodec::encode(&record)?)?;
        info!(kind = %T::KIND, key, fields = fields.len(), "[tl-01] Record fields merged");
        Ok(record)
    }

    fn delete<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        key: &str,
    ) -> Result<(), RecordStoreError> {
        let mut index = self.index(&*store)?;
        let was_indexed = index.remove_first(key);

        store.atomic_batch_write(vec![
            BatchOperation::delete(Self::storage_key(key)),
            Self::index_op(&index)?,
        ])?;

        info!(kind = %T::KIND, key, was_indexed, "[tl-01] Record deleted");
        Ok(())
    }

    fn query_by_field<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        field: &str,
        value: &str,
    ) -> Result<Vec<T>, RecordStoreError> {
        let index = self.index(store)?;
        let mut matches = Vec::new();

        for key in index.keys() {
            let bytes = store
                .get(Self::storage_key(key).as_bytes())?
                .ok_or_else(|| Self::dangling(key))?;
            let fields = RecordCodec::decode_fields(key, &bytes)?;

            if fields.get(field).map(String::as_str) == Some(value) {
                matches.push(RecordCodec::decode(key, &bytes)?);
            }
        }

        debug!(
            kind = %T::KIND,
            field,
            scanned = index.len(),
            matched = matches.len(),
            "[tl-01] Field scan complete"
        );
        Ok(matches)
    }

    fn query_all<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Vec<T>, RecordStoreError> {
        let index = self.index(store)?;
        index
            .keys()
            .iter()
            .map(|key| self.find(store, key)?.ok_or_else(|| Self::dangling(key)))
            .collect()
    }

    fn index<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<KeyIndex, RecordStoreError> {
        match store.get(Self::index_key().as_bytes())? {
            Some(bytes) => {
                let index: Option<KeyIndex> = RecordCodec::decode(Self::index_key(), &bytes)?;
                Ok(index.unwrap_or_default())
            }
            None => Ok(KeyIndex::new()),
        }
    }

    fn reset_index_op(&self) -> Result<BatchOperation, RecordStoreError> {
        Self::index_op(&KeyIndex::new())
    }

    fn put_op(&self, record: &T) -> Result<BatchOperation, RecordStoreError> {
        Ok(BatchOperation::put(
            Self::storage_key(record.key()),
            RecordCodec::encode(record)?,
        ))
    }
}

/// A single unindexed value stored under a fixed key.
pub struct SingletonRecord<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> SingletonRecord<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _value: PhantomData,
        }
    }

    pub fn exists<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<bool, RecordStoreError> {
        Ok(store.exists(self.key.as_bytes())?)
    }

    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Option<T>, RecordStoreError> {
        store
            .get(self.key.as_bytes())?
            .map(|bytes| RecordCodec::decode(self.key, &bytes))
            .transpose()
    }

    pub fn put_op(&self, value: &T) -> Result<BatchOperation, RecordStoreError> {
        Ok(BatchOperation::put(self.key, RecordCodec::encode(value)?))
    }
}
