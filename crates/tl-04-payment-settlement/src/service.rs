//! # Payment Settlement Service
//!
//! A settling update reads the account singleton, computes the new
//! balances and writes account and payment in one batch, all under the
//! shared store lock.

use crate::domain::{parse_amount, AccountInfo, Payment, PaymentParty};
use crate::ports::inbound::{PaymentSettlementApi, PaymentUpdate};
use shared_types::entities::ACCOUNT_SINGLETON_KEY;
use shared_types::errors::LedgerError;
use tl_01_record_store::{
    BatchOperation, IndexedRecordApi, KeyValueStore, RecordStoreError, RecordTable, SharedStore,
    SingletonRecord,
};
use tracing::{debug, info};

const TABLE: RecordTable<Payment> = RecordTable::new();
const ACCOUNT: SingletonRecord<AccountInfo> = SingletonRecord::new(ACCOUNT_SINGLETON_KEY);

pub struct PaymentSettlementService<S: KeyValueStore> {
    store: SharedStore<S>,
}

impl<S: KeyValueStore> PaymentSettlementService<S> {
    pub fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }

    fn load_account(store: &S) -> Result<AccountInfo, LedgerError> {
        ACCOUNT
            .load(store)?
            .ok_or_else(|| LedgerError::not_found("Account details"))
    }
}

impl<S: KeyValueStore> PaymentSettlementApi for PaymentSettlementService<S> {
    fn initialize_ops(
        &self,
        seed: &str,
    ) -> Result<(AccountInfo, Vec<BatchOperation>), LedgerError> {
        let account = AccountInfo::seeded(parse_amount("seed balance", seed)?);
        let ops = vec![TABLE.reset_index_op()?, ACCOUNT.put_op(&account)?];
        Ok((account, ops))
    }

    fn create_payment(&self, payment: Payment) -> Result<Payment, LedgerError> {
        TABLE.create(&mut *self.store.lock(), &payment)?;

        info!(
            payment_id = %payment.payment_id,
            agreement_id = %payment.agreement_id,
            "[tl-04] Payment created"
        );
        Ok(payment)
    }

    fn update_payment(&self, payment: Payment) -> Result<PaymentUpdate, LedgerError> {
        let payment_id = payment.payment_id.clone();
        let mut store = self.store.lock();

        let updated: Payment = TABLE.prepare_update(&*store, &payment_id, |existing| {
            *existing = payment;
            Ok::<(), LedgerError>(())
        })?;

        let mut batch = vec![TABLE.put_op(&updated)?];
        let settlement = if updated.buyer_bank_sign {
            let amount = parse_amount("amountTransferred", &updated.amount_transferred)?;
            let settled = Self::load_account(&store)?.settled(amount)?;
            batch.push(ACCOUNT.put_op(&settled)?);
            Some(settled)
        } else {
            None
        };

        store
            .atomic_batch_write(batch)
            .map_err(RecordStoreError::from)?;

        match &settlement {
            Some(account) => info!(
                payment_id = %payment_id,
                amount = %updated.amount_transferred,
                buyer_balance = %account.buyer_account_balance,
                seller_balance = %account.seller_account_balance,
                "[tl-04] Payment updated and settled"
            ),
            None => info!(payment_id = %payment_id, "[tl-04] Payment updated"),
        }
        Ok(PaymentUpdate {
            payment: updated,
            settlement,
        })
    }

    fn delete_payment(&self, payment_id: &str) -> Result<(), LedgerError> {
        TABLE.delete(&mut *self.store.lock(), payment_id)?;
        info!(payment_id, "[tl-04] Payment deleted");
        Ok(())
    }

    fn payment(&self, payment_id: &str) -> Result<Payment, LedgerError> {
        Ok(TABLE.get(&*self.store.lock(), payment_id)?)
    }

    fn payments_by(&self, party: PaymentParty, name: &str) -> Result<Vec<Payment>, LedgerError> {
        let found = TABLE.query_by_field(&*self.store.lock(), party.field_name(), name)?;
        debug!(field = party.field_name(), name, matched = found.len(), "[tl-04] Payment query");

        if found.is_empty() {
            return Err(LedgerError::not_found(name));
        }
        Ok(found)
    }

    fn all_payments(&self) -> Result<Vec<Payment>, LedgerError> {
        Ok(TABLE.query_all(&*self.store.lock())?)
    }

    fn account_details(&self) -> Result<AccountInfo, LedgerError> {
        Self::load_account(&self.store.lock())
    }

    fn is_initialized(&self) -> Result<bool, LedgerError> {
        Ok(ACCOUNT.exists(&*self.store.lock())?)
    }
}

#[cfg(test)]
impl<S: KeyValueStore> PaymentSettlementService<S> {
    /// Apply the initialization batch on its own.
    pub(crate) fn initialize(&self, seed: &str) -> Result<AccountInfo, LedgerError> {
        let (account, ops) = self.initialize_ops(seed)?;
        self.store
            .lock()
            .atomic_batch_write(ops)
            .map_err(RecordStoreError::from)?;
        Ok(account)
    }
}
