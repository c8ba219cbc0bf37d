//! # Inbound Ports
//!
//! Payment and account operations offered to the invocation handler and
//! the runtime bootstrap.

use crate::domain::{AccountInfo, Payment, PaymentParty};
use shared_types::errors::LedgerError;
use tl_01_record_store::BatchOperation;

/// Outcome of a payment update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentUpdate {
    pub payment: Payment,
    /// The account balances after settlement, when the update settled.
    pub settlement: Option<AccountInfo>,
}

pub trait PaymentSettlementApi: Send + Sync {
    /// The seeded account and the batch steps that write it and empty the
    /// payment index. Nothing is written until the caller applies them.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `seed` is not a decimal.
    fn initialize_ops(&self, seed: &str)
        -> Result<(AccountInfo, Vec<BatchOperation>), LedgerError>;

    /// # Errors
    ///
    /// `AlreadyExists` if the id already holds a live payment.
    fn create_payment(&self, payment: Payment) -> Result<Payment, LedgerError>;

    /// Replace a payment. When it carries the buyer bank's signature the
    /// amount is settled, and the account and payment are written together.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the payment or the account singleton is absent
    /// - `InvalidArgument` if a settling amount is not a decimal
    fn update_payment(&self, payment: Payment) -> Result<PaymentUpdate, LedgerError>;

    /// Succeeds when nothing was stored.
    fn delete_payment(&self, payment_id: &str) -> Result<(), LedgerError>;

    fn payment(&self, payment_id: &str) -> Result<Payment, LedgerError>;

    /// # Errors
    ///
    /// `NotFound` if no payment matches.
    fn payments_by(&self, party: PaymentParty, name: &str) -> Result<Vec<Payment>, LedgerError>;

    fn all_payments(&self) -> Result<Vec<Payment>, LedgerError>;

    fn account_details(&self) -> Result<AccountInfo, LedgerError>;

    /// Whether the account singleton has been written.
    fn is_initialized(&self) -> Result<bool, LedgerError>;
}
