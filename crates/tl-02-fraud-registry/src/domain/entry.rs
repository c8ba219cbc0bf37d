//! The fraud-list entry record.

use serde::{Deserialize, Serialize};
use shared_types::entities::RecordKind;
use shared_types::errors::LedgerError;
use tl_01_record_store::StoredRecord;

/// Field compared when screening a party name.
pub const FRAUD_NAME_FIELD: &str = "fraudName";

/// A fraud-listed party. Append-only: entries are never updated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudEntry {
    #[serde(rename = "fraudId")]
    pub fraud_id: String,
    #[serde(rename = "fraudName")]
    pub fraud_name: String,
}

impl FraudEntry {
    /// # Errors
    ///
    /// `InvalidArgument` if `fraud_id` is empty.
    pub fn new(fraud_id: impl Into<String>, fraud_name: impl Into<String>) -> Result<Self, LedgerError> {
        let fraud_id = fraud_id.into();
        if fraud_id.is_empty() {
            return Err(LedgerError::invalid_argument(
                "fraudId must be a non-empty string",
            ));
        }
        Ok(Self {
            fraud_id,
            fraud_name: fraud_name.into(),
        })
    }
}

impl StoredRecord for FraudEntry {
    const KIND: RecordKind = RecordKind::Fraud;

    fn key(&self) -> &str {
        &self.fraud_id
    }
}
