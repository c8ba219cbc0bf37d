//! # Records and Encoding
//!
//! Every persisted record is a flat JSON object of string fields. Typed
//! records convert to and from that shape through serde.

use crate::domain::errors::RecordStoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::entities::{FieldMap, RecordKind};

/// A typed record stored under its own key and listed in its kind's index.
pub trait StoredRecord: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The record type; selects the index.
    const KIND: RecordKind;

    /// The primary key this record is stored under.
    fn key(&self) -> &str;
}

/// JSON codec for persisted values.
pub struct RecordCodec;

impl RecordCodec {
    pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, RecordStoreError> {
        serde_json::to_vec(value).map_err(|e| RecordStoreError::Codec {
            what: std::any::type_name::<T>().to_string(),
            message: e.to_string(),
        })
    }

    /// Decode `bytes` into `T`. `what` names the value in error messages.
    pub fn decode<T: DeserializeOwned>(what: &str, bytes: &[u8]) -> Result<T, RecordStoreError> {
        serde_json::from_slice(bytes).map_err(|e| RecordStoreError::Codec {
            what: what.to_string(),
            message: e.to_string(),
        })
    }

    /// Decode a record as its raw field map.
    pub fn decode_fields(what: &str, bytes: &[u8]) -> Result<FieldMap, RecordStoreError> {
        Self::decode(what, bytes)
    }

    /// Build a typed record from a field map.
    pub fn from_fields<T: DeserializeOwned>(
        what: &str,
        fields: &FieldMap,
    ) -> Result<T, RecordStoreError> {
        let value = serde_json::to_value(fields).map_err(|e| RecordStoreError::Codec {
            what: what.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_value(value).map_err(|e| RecordStoreError::Codec {
            what: what.to_string(),
            message: e.to_string(),
        })
    }

    /// A single record as a JSON document.
    pub fn to_document<T: StoredRecord>(record: &T) -> Result<serde_json::Value, RecordStoreError> {
        serde_json::to_value(record).map_err(|e| RecordStoreError::Codec {
            what: record.key().to_string(),
            message: e.to_string(),
        })
    }

    /// `{"<key>": record, ...}` for query results.
    pub fn keyed_document<T: StoredRecord>(
        records: &[T],
    ) -> Result<serde_json::Value, RecordStoreError> {
        let mut doc = serde_json::Map::with_capacity(records.len());
        for record in records {
            doc.insert(record.key().to_string(), Self::to_document(record)?);
        }
        Ok(serde_json::Value::Object(doc))
    }
}
