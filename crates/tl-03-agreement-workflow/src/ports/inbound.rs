//! # Inbound Ports
//!
//! The agreement workflow API offered to the invocation handler.

use crate::domain::{Agreement, ApprovalStatus, PartyField};
use shared_types::errors::LedgerError;
use tl_01_record_store::BatchOperation;
use tl_02_fraud_registry::FraudEntry;

/// Agreement workflow API.
pub trait AgreementWorkflowApi: Send + Sync {
    /// Screen both counterparties and store a new agreement as supplied.
    ///
    /// # Errors
    ///
    /// - `FraudRejected` if the buyer or seller name is fraud-listed
    /// - `AlreadyExists` if the id already holds a live agreement
    fn create_agreement(&self, agreement: Agreement) -> Result<Agreement, LedgerError>;

    /// Overwrite an existing agreement and recompute its approval state.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no live agreement has this id
    /// - `InvalidArgument` if `total_value` is not an integer
    fn update_agreement(&self, agreement: Agreement) -> Result<Agreement, LedgerError>;

    /// Remove an agreement. Succeeds when nothing was stored.
    fn delete_agreement(&self, agreement_id: &str) -> Result<(), LedgerError>;

    fn agreement(&self, agreement_id: &str) -> Result<Agreement, LedgerError>;

    /// Agreements whose `field` equals `name`.
    ///
    /// # Errors
    ///
    /// `NotFound` if none match.
    fn agreements_by(&self, field: PartyField, name: &str) -> Result<Vec<Agreement>, LedgerError>;

    fn all_agreements(&self) -> Result<Vec<Agreement>, LedgerError>;

    /// The signature of `user`'s role on an agreement.
    ///
    /// # Errors
    ///
    /// `NotFound` if the agreement is absent or `user` is none of its
    /// seller, buyer, buyer bank or seller bank.
    fn approval_status(&self, user: &str, agreement_id: &str)
        -> Result<ApprovalStatus, LedgerError>;

    fn register_fraud(&self, fraud_id: &str, fraud_name: &str) -> Result<FraudEntry, LedgerError>;

    fn fraud_list(&self) -> Result<Vec<FraudEntry>, LedgerError>;

    /// # Errors
    ///
    /// `NotFound` if no entry has this name.
    fn fraud_details(&self, fraud_name: &str) -> Result<Vec<FraudEntry>, LedgerError>;

    /// Batch steps that empty the agreement and fraud indexes. The caller
    /// applies them, together with anything else that must land at once.
    fn reset_ops(&self) -> Result<Vec<BatchOperation>, LedgerError>;
}
