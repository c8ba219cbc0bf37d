//! # Fraud Registry Service

use crate::domain::entry::{FraudEntry, FRAUD_NAME_FIELD};
use shared_types::errors::LedgerError;
use tl_01_record_store::{BatchOperation, IndexedRecordApi, KeyValueStore, RecordTable};
use tracing::{debug, info};

const TABLE: RecordTable<FraudEntry> = RecordTable::new();

/// Store-level fraud list operations.
pub struct FraudList;

impl FraudList {
    pub fn register<S: KeyValueStore + ?Sized>(
        store: &mut S,
        fraud_id: &str,
        fraud_name: &str,
    ) -> Result<FraudEntry, LedgerError> {
        let entry = FraudEntry::new(fraud_id, fraud_name)?;
        TABLE.create(store, &entry)?;

        info!(fraud_id, fraud_name, "[tl-02] Fraud entry registered");
        Ok(entry)
    }

    /// Matching entries; empty when the name is not listed.
    pub fn matches<S: KeyValueStore + ?Sized>(
        store: &S,
        name: &str,
    ) -> Result<Vec<FraudEntry>, LedgerError> {
        let found = TABLE.query_by_field(store, FRAUD_NAME_FIELD, name)?;
        debug!(name, matched = found.len(), "[tl-02] Fraud screen");
        Ok(found)
    }

    pub fn is_listed<S: KeyValueStore + ?Sized>(store: &S, name: &str) -> Result<bool, LedgerError> {
        Ok(!Self::matches(store, name)?.is_empty())
    }

    pub fn list_all<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<FraudEntry>, LedgerError> {
        Ok(TABLE.query_all(store)?)
    }

    /// Batch step that clears the fraud index. Entries already stored stay
    /// in the backend.
    pub fn reset_op() -> Result<BatchOperation, LedgerError> {
        Ok(TABLE.reset_index_op()?)
    }
}
