//! # Agreement Workflow Service
//!
//! Every operation holds the shared store lock from its first read to its
//! last write, so the fraud screen, the existence check and the write of a
//! create are one unit.

use crate::domain::{recompute, Agreement, ApprovalStatus, PartyField, PartyRole};
use crate::ports::inbound::AgreementWorkflowApi;
use shared_types::errors::{Counterparty, LedgerError};
use tl_01_record_store::{BatchOperation, IndexedRecordApi, KeyValueStore, RecordTable, SharedStore};
use tl_02_fraud_registry::{FraudEntry, FraudList};
use tracing::{debug, info, warn};

const TABLE: RecordTable<Agreement> = RecordTable::new();

pub struct AgreementWorkflowService<S: KeyValueStore> {
    store: SharedStore<S>,
}

impl<S: KeyValueStore> AgreementWorkflowService<S> {
    pub fn new(store: SharedStore<S>) -> Self {
        Self { store }
    }

    fn screen(
        store: &S,
        agreement: &Agreement,
        role: Counterparty,
        name: &str,
    ) -> Result<(), LedgerError> {
        if FraudList::is_listed(store, name)? {
            warn!(
                agreement_id = %agreement.agreement_id,
                role = %role,
                name,
                "[tl-03] Agreement rejected by fraud screen"
            );
            return Err(LedgerError::FraudRejected {
                role,
                subject: "Agreement".to_string(),
                key: agreement.agreement_id.clone(),
            });
        }
        Ok(())
    }
}

impl<S: KeyValueStore> AgreementWorkflowApi for AgreementWorkflowService<S> {
    fn create_agreement(&self, agreement: Agreement) -> Result<Agreement, LedgerError> {
        let mut store = self.store.lock();

        Self::screen(&store, &agreement, Counterparty::Buyer, &agreement.buyer_name)?;
        Self::screen(&store, &agreement, Counterparty::Seller, &agreement.seller_name)?;
        TABLE.create(&mut *store, &agreement)?;

        info!(
            agreement_id = %agreement.agreement_id,
            status = %agreement.status,
            "[tl-03] Agreement created"
        );
        Ok(agreement)
    }

    fn update_agreement(&self, agreement: Agreement) -> Result<Agreement, LedgerError> {
        let agreement_id = agreement.agreement_id.clone();
        let mut store = self.store.lock();

        let updated = TABLE.update_with(&mut *store, &agreement_id, |existing| {
            *existing = agreement;
            recompute(existing)
        })?;

        info!(
            agreement_id = %agreement_id,
            status = %updated.status,
            buyer_bank_sign = updated.buyer_bank_sign,
            seller_bank_sign = updated.seller_bank_sign,
            "[tl-03] Agreement updated"
        );
        Ok(updated)
    }

    fn delete_agreement(&self, agreement_id: &str) -> Result<(), LedgerError> {
        TABLE.delete(&mut *self.store.lock(), agreement_id)?;
        info!(agreement_id, "[tl-03] Agreement deleted");
        Ok(())
    }

    fn agreement(&self, agreement_id: &str) -> Result<Agreement, LedgerError> {
        Ok(TABLE.get(&*self.store.lock(), agreement_id)?)
    }

    fn agreements_by(&self, field: PartyField, name: &str) -> Result<Vec<Agreement>, LedgerError> {
        let found = TABLE.query_by_field(&*self.store.lock(), field.field_name(), name)?;
        debug!(field = field.field_name(), name, matched = found.len(), "[tl-03] Agreement query");

        if found.is_empty() {
            return Err(LedgerError::not_found(name));
        }
        Ok(found)
    }

    fn all_agreements(&self) -> Result<Vec<Agreement>, LedgerError> {
        Ok(TABLE.query_all(&*self.store.lock())?)
    }

    fn approval_status(
        &self,
        user: &str,
        agreement_id: &str,
    ) -> Result<ApprovalStatus, LedgerError> {
        let agreement = self.agreement(agreement_id)?;
        let role = PartyRole::resolve(&agreement, user).ok_or_else(|| LedgerError::not_found(user))?;

        debug!(agreement_id, user, ?role, "[tl-03] Approval status resolved");
        Ok(ApprovalStatus::of(&agreement, role))
    }

    fn register_fraud(&self, fraud_id: &str, fraud_name: &str) -> Result<FraudEntry, LedgerError> {
        FraudList::register(&mut *self.store.lock(), fraud_id, fraud_name)
    }

    fn fraud_list(&self) -> Result<Vec<FraudEntry>, LedgerError> {
        FraudList::list_all(&*self.store.lock())
    }

    fn fraud_details(&self, fraud_name: &str) -> Result<Vec<FraudEntry>, LedgerError> {
        let found = FraudList::matches(&*self.store.lock(), fraud_name)?;
        if found.is_empty() {
            return Err(LedgerError::not_found(fraud_name));
        }
        Ok(found)
    }

    fn reset_ops(&self) -> Result<Vec<BatchOperation>, LedgerError> {
        Ok(vec![TABLE.reset_index_op()?, FraudList::reset_op()?])
    }
}
