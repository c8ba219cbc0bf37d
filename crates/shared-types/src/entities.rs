//! # Core Domain Entities
//!
//! Identifiers shared by every record-owning subsystem.

use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A flat record: field name to string value.
pub type FieldMap = BTreeMap<String, String>;

/// Key of the non-indexed account singleton.
pub const ACCOUNT_SINGLETON_KEY: &str = "_AccountIndex";

/// Every indexed record type in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Agreement,
    Fraud,
    Payment,
}

impl RecordKind {
    /// Backend key under which this kind's key index is stored.
    pub fn index_key(&self) -> &'static str {
        match self {
            RecordKind::Agreement => "_Agreementindex",
            RecordKind::Fraud => "_FraudListIndexStr",
            RecordKind::Payment => "_PaymentIndex",
        }
    }

    /// Backend key holding the record `key` of this kind.
    ///
    /// Each kind has its own prefix, and no prefix starts with `_`, so records
    /// of different kinds never share a backend key with each other or with an
    /// index or the account singleton.
    pub fn storage_key(&self, key: &str) -> String {
        let prefix = match self {
            RecordKind::Agreement => "agreement/",
            RecordKind::Fraud => "fraud/",
            RecordKind::Payment => "payment/",
        };
        format!("{prefix}{key}")
    }

    /// Human-readable name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Agreement => "Agreement",
            RecordKind::Fraud => "Fraud entry",
            RecordKind::Payment => "Payment",
        }
    }

    /// Field holding the primary key in the persisted record.
    pub fn key_field(&self) -> &'static str {
        match self {
            RecordKind::Agreement => "agreementId",
            RecordKind::Fraud => "fraudId",
            RecordKind::Payment => "paymentId",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a signature flag. Only the literal tokens `"true"` and `"false"` are accepted.
///
/// # Errors
///
/// `InvalidArgument` naming `field` for any other token.
pub fn parse_sign_flag(field: &str, value: &str) -> Result<bool, LedgerError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(LedgerError::invalid_argument(format!(
            "{} must be \"true\" or \"false\", got {:?}",
            field, other
        ))),
    }
}
