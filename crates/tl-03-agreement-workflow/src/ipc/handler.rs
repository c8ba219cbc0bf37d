//! # Invocation Handler
//!
//! Maps the agreement and fraud-list functions onto `AgreementWorkflowApi`.
//! Argument counts are checked before the service is touched.

use crate::domain::{Agreement, PartyField, AGREEMENT_ARITY};
use crate::ports::inbound::AgreementWorkflowApi;
use shared_types::errors::LedgerError;
use shared_types::ipc::{Invocation, InvocationHandler, InvocationResponse, Notice};
use std::sync::Arc;
use tl_01_record_store::{RecordCodec, StoredRecord};

pub mod functions {
    pub const CREATE_AGREEMENT: &str = "create_agreement";
    pub const UPDATE_AGREEMENT: &str = "update_agreement";
    pub const DELETE_AGREEMENT: &str = "delete_agreement";
    pub const UPDATE_FRAUD_LIST: &str = "update_fraud_list";
    pub const GET_AGREEMENT_BY_ID: &str = "getAgreement_byID";
    pub const GET_AGREEMENT_BY_BUYER: &str = "getAgreement_byBuyer";
    pub const GET_AGREEMENT_BY_SELLER: &str = "getAgreement_bySeller";
    pub const GET_AGREEMENT_BY_SHIPPER: &str = "getAgreement_byShipper";
    pub const GET_AGREEMENT_BY_BUYER_BANK: &str = "getAgreement_byBuyerBank";
    pub const GET_AGREEMENT_BY_SELLER_BANK: &str = "getAgreement_bySellerBank";
    pub const GET_AGREEMENT_BY_PORT_AUTHORITY: &str = "getAgreement_byPortAuthority";
    pub const GET_ALL_AGREEMENT: &str = "get_AllAgreement";
    pub const GET_APPROVAL_STATUS: &str = "getApprovalStatus";
    pub const GET_FRAUD_LIST: &str = "get_fraud_list";
    pub const GET_FRAUD_DETAILS: &str = "get_fraud_details";
}

use functions::*;

const SERVED: &[&str] = &[
    CREATE_AGREEMENT,
    UPDATE_AGREEMENT,
    DELETE_AGREEMENT,
    UPDATE_FRAUD_LIST,
    GET_AGREEMENT_BY_ID,
    GET_AGREEMENT_BY_BUYER,
    GET_AGREEMENT_BY_SELLER,
    GET_AGREEMENT_BY_SHIPPER,
    GET_AGREEMENT_BY_BUYER_BANK,
    GET_AGREEMENT_BY_SELLER_BANK,
    GET_AGREEMENT_BY_PORT_AUTHORITY,
    GET_ALL_AGREEMENT,
    GET_APPROVAL_STATUS,
    GET_FRAUD_LIST,
    GET_FRAUD_DETAILS,
];

/// Reference field on agreement notices.
pub const AGREEMENT_REF: &str = "agreementID";
/// Reference field on fraud-list notices.
pub const FRAUD_REF: &str = "fraudID";

pub struct AgreementHandler<A: AgreementWorkflowApi> {
    api: Arc<A>,
}

impl<A: AgreementWorkflowApi> AgreementHandler<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    fn by_party(&self, field: PartyField, args: &[String]) -> Result<InvocationResponse, LedgerError> {
        keyed(&self.api.agreements_by(field, &args[0])?)
    }
}

fn keyed<T: StoredRecord>(records: &[T]) -> Result<InvocationResponse, LedgerError> {
    Ok(InvocationResponse::Document(RecordCodec::keyed_document(records)?))
}

fn acknowledged(message: &str, field: &str, id: &str) -> Result<InvocationResponse, LedgerError> {
    Ok(InvocationResponse::Acknowledged(
        Notice::success(message).with_ref(field, id),
    ))
}

impl<A: AgreementWorkflowApi> InvocationHandler for AgreementHandler<A> {
    fn name(&self) -> &'static str {
        "tl-03"
    }

    fn functions(&self) -> &'static [&'static str] {
        SERVED
    }

    fn handle(&self, invocation: &Invocation) -> Result<InvocationResponse, LedgerError> {
        match invocation.function.as_str() {
            CREATE_AGREEMENT => {
                let agreement = Agreement::from_args(invocation.expect_args(AGREEMENT_ARITY)?)?;
                let created = self.api.create_agreement(agreement)?;
                acknowledged("Agreement created successfully", AGREEMENT_REF, &created.agreement_id)
            }
            UPDATE_AGREEMENT => {
                let agreement = Agreement::from_args(invocation.expect_args(AGREEMENT_ARITY)?)?;
                let updated = self.api.update_agreement(agreement)?;
                acknowledged("Agreement updated successfully", AGREEMENT_REF, &updated.agreement_id)
            }
            DELETE_AGREEMENT => {
                let args = invocation.expect_args(1)?;
                self.api.delete_agreement(&args[0])?;
                acknowledged("Agreement deleted successfully", AGREEMENT_REF, &args[0])
            }
            UPDATE_FRAUD_LIST => {
                let args = invocation.expect_args(2)?;
                let entry = self.api.register_fraud(&args[0], &args[1])?;
                acknowledged("Fraud entry created successfully", FRAUD_REF, &entry.fraud_id)
            }
            GET_AGREEMENT_BY_ID => {
                let args = invocation.expect_args(1)?;
                let agreement = self.api.agreement(&args[0])?;
                Ok(InvocationResponse::Document(RecordCodec::to_document(&agreement)?))
            }
            GET_AGREEMENT_BY_BUYER => self.by_party(PartyField::Buyer, invocation.expect_args(1)?),
            GET_AGREEMENT_BY_SELLER => self.by_party(PartyField::Seller, invocation.expect_args(1)?),
            GET_AGREEMENT_BY_SHIPPER => {
                self.by_party(PartyField::Shipper, invocation.expect_args(1)?)
            }
            GET_AGREEMENT_BY_BUYER_BANK => {
                self.by_party(PartyField::BuyerBank, invocation.expect_args(1)?)
            }
            GET_AGREEMENT_BY_SELLER_BANK => {
                self.by_party(PartyField::SellerBank, invocation.expect_args(1)?)
            }
            GET_AGREEMENT_BY_PORT_AUTHORITY => {
                self.by_party(PartyField::PortAuthority, invocation.expect_args(1)?)
            }
            GET_ALL_AGREEMENT => {
                invocation.expect_args(1)?;
                keyed(&self.api.all_agreements()?)
            }
            GET_APPROVAL_STATUS => {
                let args = invocation.expect_args(2)?;
                let approval = self.api.approval_status(&args[0], &args[1])?;
                Ok(InvocationResponse::Document(approval.to_document()))
            }
            GET_FRAUD_LIST => {
                invocation.expect_args(1)?;
                keyed(&self.api.fraud_list()?)
            }
            GET_FRAUD_DETAILS => {
                let args = invocation.expect_args(1)?;
                keyed(&self.api.fraud_details(&args[0])?)
            }
            other => Err(LedgerError::invalid_argument(format!(
                "Received unknown function invocation: {}",
                other
            ))),
        }
    }
}
