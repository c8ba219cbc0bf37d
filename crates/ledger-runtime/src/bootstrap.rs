//! # Ledger Bootstrap
//!
//! `init` returns the ledger to its deployed state: agreement, fraud and
//! payment indexes emptied and both accounts seeded with one balance.
//! Records themselves stay in the store but are no longer listed.
//!
//! The resets and the seeded account are written as one batch under the
//! store lock, so no other invocation observes a half-initialized ledger.

use crate::config::ConfigError;
use crate::dispatcher::DispatchError;
use crate::storage::StorageError;
use shared_types::errors::LedgerError;
use shared_types::ipc::{Invocation, InvocationHandler, InvocationResponse, Notice};
use std::sync::Arc;
use thiserror::Error;
use tl_01_record_store::{KeyValueStore, RecordStoreError, SharedStore};
use tl_03_agreement_workflow::AgreementWorkflowApi;
use tl_04_payment_settlement::{AccountInfo, PaymentSettlementApi};
use tracing::info;

pub const INIT: &str = "init";

/// Errors that stop the runtime from starting.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Handler wiring failed: {0}")]
    Wiring(#[from] DispatchError),

    #[error("Initialization failed: {0}")]
    Init(#[from] LedgerError),
}

pub struct Bootstrap<S: KeyValueStore, A, P> {
    store: SharedStore<S>,
    agreements: Arc<A>,
    payments: Arc<P>,
}

impl<S, A, P> Bootstrap<S, A, P>
where
    S: KeyValueStore,
    A: AgreementWorkflowApi,
    P: PaymentSettlementApi,
{
    pub fn new(store: SharedStore<S>, agreements: Arc<A>, payments: Arc<P>) -> Self {
        Self {
            store,
            agreements,
            payments,
        }
    }

    /// Reset every index and seed both accounts with `seed`.
    ///
    /// The whole batch is built before the lock is taken; a bad seed fails
    /// there and leaves the ledger untouched.
    pub fn init(&self, seed: &str) -> Result<AccountInfo, LedgerError> {
        let (account, mut batch) = self.payments.initialize_ops(seed)?;
        batch.extend(self.agreements.reset_ops()?);

        self.store
            .lock()
            .atomic_batch_write(batch)
            .map_err(RecordStoreError::from)?;

        info!(
            buyer_balance = %account.buyer_account_balance,
            seller_balance = %account.seller_account_balance,
            "[runtime] Ledger initialized"
        );
        Ok(account)
    }

    /// Whether start-up must run `init`.
    pub fn needs_init(&self, reset_on_start: bool) -> Result<bool, LedgerError> {
        if reset_on_start {
            return Ok(true);
        }
        Ok(!self.payments.is_initialized()?)
    }
}

impl<S, A, P> InvocationHandler for Bootstrap<S, A, P>
where
    S: KeyValueStore,
    A: AgreementWorkflowApi,
    P: PaymentSettlementApi,
{
    fn name(&self) -> &'static str {
        "runtime"
    }

    fn functions(&self) -> &'static [&'static str] {
        &[INIT]
    }

    fn handle(&self, invocation: &Invocation) -> Result<InvocationResponse, LedgerError> {
        let args = invocation.expect_args(1)?;
        self.init(&args[0])?;
        Ok(InvocationResponse::Acknowledged(Notice::success(
            "Trade ledger deployed successfully",
        )))
    }
}
