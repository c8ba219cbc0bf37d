//! Invocation handler for the payment and account functions.

use crate::domain::{Payment, PaymentParty, PAYMENT_CREATE_ARITY, PAYMENT_UPDATE_ARITY};
use crate::ports::inbound::PaymentSettlementApi;
use serde_json::Value;
use shared_types::errors::LedgerError;
use shared_types::ipc::{Invocation, InvocationHandler, InvocationResponse, Notice};
use std::sync::Arc;
use tl_01_record_store::{RecordCodec, RecordStoreError};

pub mod functions {
    pub const CREATE_PAYMENT: &str = "createPayment";
    pub const UPDATE_PAYMENT: &str = "updatePayment";
    pub const DELETE_PAYMENT: &str = "deletePayment";
    pub const GET_PAYMENT_BY_ID: &str = "getPaymentByID";
    pub const GET_PAYMENT_BY_BUYER: &str = "getPaymentByBuyer";
    pub const GET_PAYMENT_BY_SELLER: &str = "getPaymentBySeller";
    pub const GET_ALL_PAYMENT: &str = "getAllPayment";
    pub const GET_ACCOUNT_DETAILS: &str = "getAccountDetails";
}

use functions::*;

const SERVED: &[&str] = &[
    CREATE_PAYMENT,
    UPDATE_PAYMENT,
    DELETE_PAYMENT,
    GET_PAYMENT_BY_ID,
    GET_PAYMENT_BY_BUYER,
    GET_PAYMENT_BY_SELLER,
    GET_ALL_PAYMENT,
    GET_ACCOUNT_DETAILS,
];

/// Reference field on payment notices.
pub const PAYMENT_REF: &str = "paymentID";

pub struct PaymentHandler<P: PaymentSettlementApi> {
    api: Arc<P>,
}

impl<P: PaymentSettlementApi> PaymentHandler<P> {
    pub fn new(api: Arc<P>) -> Self {
        Self { api }
    }
}

fn notice(message: &str, payment_id: &str) -> InvocationResponse {
    InvocationResponse::Acknowledged(Notice::success(message).with_ref(PAYMENT_REF, payment_id))
}

fn document<T: serde::Serialize>(value: &T) -> Result<InvocationResponse, LedgerError> {
    let doc: Value = serde_json::to_value(value).map_err(|e| RecordStoreError::Codec {
        what: std::any::type_name::<T>().to_string(),
        message: e.to_string(),
    })?;
    Ok(InvocationResponse::Document(doc))
}

impl<P: PaymentSettlementApi> InvocationHandler for PaymentHandler<P> {
    fn name(&self) -> &'static str {
        "tl-04"
    }

    fn functions(&self) -> &'static [&'static str] {
        SERVED
    }

    fn handle(&self, invocation: &Invocation) -> Result<InvocationResponse, LedgerError> {
        match invocation.function.as_str() {
            CREATE_PAYMENT => {
                let payment = Payment::from_create_args(invocation.expect_args(PAYMENT_CREATE_ARITY)?)?;
                let created = self.api.create_payment(payment)?;
                Ok(notice("Payment created successfully", &created.payment_id))
            }
            UPDATE_PAYMENT => {
                let payment = Payment::from_update_args(invocation.expect_args(PAYMENT_UPDATE_ARITY)?)?;
                let update = self.api.update_payment(payment)?;
                Ok(notice("Payment updated successfully", &update.payment.payment_id))
            }
            DELETE_PAYMENT => {
                let args = invocation.expect_args(1)?;
                self.api.delete_payment(&args[0])?;
                Ok(notice("Payment deleted successfully", &args[0]))
            }
            GET_PAYMENT_BY_ID => {
                let args = invocation.expect_args(1)?;
                document(&self.api.payment(&args[0])?)
            }
            GET_PAYMENT_BY_BUYER | GET_PAYMENT_BY_SELLER => {
                let args = invocation.expect_args(1)?;
                let party = if invocation.function == GET_PAYMENT_BY_BUYER {
                    PaymentParty::Buyer
                } else {
                    PaymentParty::Seller
                };
                let found = self.api.payments_by(party, &args[0])?;
                Ok(InvocationResponse::Document(RecordCodec::keyed_document(&found)?))
            }
            GET_ALL_PAYMENT => {
                invocation.expect_args(1)?;
                let all = self.api.all_payments()?;
                Ok(InvocationResponse::Document(RecordCodec::keyed_document(&all)?))
            }
            GET_ACCOUNT_DETAILS => {
                invocation.expect_args(1)?;
                document(&self.api.account_details()?)
            }
            other => Err(LedgerError::invalid_argument(format!(
                "Received unknown function invocation: {}",
                other
            ))),
        }
    }
}
