//! Error types for the record store.

use shared_types::entities::RecordKind;
use shared_types::errors::LedgerError;
use std::fmt;
use thiserror::Error;

/// Key-value backend errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KVStoreError {
    /// I/O error during read/write.
    IOError { message: String },
    /// Persisted bytes could not be interpreted.
    CorruptionError { message: String },
}

impl fmt::Display for KVStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KVStoreError::IOError { message } => write!(f, "KV store I/O error: {}", message),
            KVStoreError::CorruptionError { message } => {
                write!(f, "KV store corruption: {}", message)
            }
        }
    }
}

impl std::error::Error for KVStoreError {}

/// Errors from record-level operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordStoreError {
    #[error("This {kind} already exists: {key}")]
    AlreadyExists { kind: RecordKind, key: String },

    #[error("{key} Not Found.")]
    NotFound { kind: RecordKind, key: String },

    /// The index names a key that holds no live record.
    #[error("Failed to get state for {key}")]
    DanglingIndexEntry { kind: RecordKind, key: String },

    #[error("Failed to decode {what}: {message}")]
    Codec { what: String, message: String },

    /// An update tried to move a record to a different key.
    #[error("{kind} key cannot change from {key} to {attempted}")]
    KeyChanged {
        kind: RecordKind,
        key: String,
        attempted: String,
    },

    #[error(transparent)]
    Backend(#[from] KVStoreError),
}

impl From<RecordStoreError> for LedgerError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::AlreadyExists { kind, key } => LedgerError::AlreadyExists {
                subject: kind.label().to_string(),
                key,
            },
            RecordStoreError::NotFound { key, .. } => LedgerError::NotFound { subject: key },
            RecordStoreError::KeyChanged { .. } => LedgerError::invalid_argument(err.to_string()),
            RecordStoreError::DanglingIndexEntry { .. }
            | RecordStoreError::Codec { .. }
            | RecordStoreError::Backend(_) => LedgerError::backend(err.to_string()),
        }
    }
}
