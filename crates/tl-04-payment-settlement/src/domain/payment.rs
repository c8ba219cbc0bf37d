//! The payment record.

use crate::domain::account::{BUYER_ACCOUNT_NUMBER, SELLER_ACCOUNT_NUMBER};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::entities::{parse_sign_flag, RecordKind};
use shared_types::errors::LedgerError;
use tl_01_record_store::StoredRecord;

/// `createPayment` arguments. The last two are accepted and ignored; the
/// account numbers are fixed, not supplied.
pub const PAYMENT_CREATE_ARITY: usize = 13;
/// `updatePayment` arguments.
pub const PAYMENT_UPDATE_ARITY: usize = 13;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    #[serde(rename = "agreementId")]
    pub agreement_id: String,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "sellerName")]
    pub seller_name: String,
    #[serde(rename = "buyerAccount")]
    pub buyer_account: String,
    #[serde(rename = "sellerAccount")]
    pub seller_account: String,
    /// Decimal string; parsed only when the payment settles.
    #[serde(rename = "amountTransferred")]
    pub amount_transferred: String,
    #[serde(rename = "paymentStatus")]
    pub status: String,
    #[serde(rename = "paymentCUDate")]
    pub updated_date: String,
    #[serde(rename = "paymentDeadlineDate")]
    pub deadline_date: String,
    #[serde(rename = "buyerBank_sign")]
    #[serde_as(as = "DisplayFromStr")]
    pub buyer_bank_sign: bool,
    #[serde(rename = "bb_name")]
    pub buyer_bank_name: String,
    #[serde(rename = "sb_name")]
    pub seller_bank_name: String,
}

impl Payment {
    /// Build a new payment from `createPayment` arguments, filling in the
    /// fixed account numbers.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on a wrong count, an empty id or a bad sign token.
    pub fn from_create_args(args: &[String]) -> Result<Self, LedgerError> {
        let [payment_id, agreement_id, buyer_name, seller_name, amount, updated_date, status, deadline_date, buyer_bank_sign, buyer_bank_name, seller_bank_name, _, _] =
            fixed::<PAYMENT_CREATE_ARITY>(args)?;

        Self::build(
            payment_id,
            [
                agreement_id,
                buyer_name,
                seller_name,
                BUYER_ACCOUNT_NUMBER,
                SELLER_ACCOUNT_NUMBER,
                amount,
                status,
                updated_date,
                deadline_date,
                buyer_bank_name,
                seller_bank_name,
            ],
            buyer_bank_sign,
        )
    }

    /// Build the replacement record from `updatePayment` arguments.
    pub fn from_update_args(args: &[String]) -> Result<Self, LedgerError> {
        let [payment_id, agreement_id, buyer_name, seller_name, buyer_account, seller_account, amount, updated_date, status, deadline_date, buyer_bank_sign, buyer_bank_name, seller_bank_name] =
            fixed::<PAYMENT_UPDATE_ARITY>(args)?;

        Self::build(
            payment_id,
            [
                agreement_id,
                buyer_name,
                seller_name,
                buyer_account,
                seller_account,
                amount,
                status,
                updated_date,
                deadline_date,
                buyer_bank_name,
                seller_bank_name,
            ],
            buyer_bank_sign,
        )
    }

    fn build(
        payment_id: &str,
        fields: [&str; 11],
        buyer_bank_sign: &str,
    ) -> Result<Self, LedgerError> {
        if payment_id.is_empty() {
            return Err(LedgerError::invalid_argument(
                "paymentId must be a non-empty string",
            ));
        }
        let [agreement_id, buyer_name, seller_name, buyer_account, seller_account, amount, status, updated_date, deadline_date, buyer_bank_name, seller_bank_name] =
            fields.map(String::from);

        Ok(Self {
            payment_id: payment_id.to_string(),
            agreement_id,
            buyer_name,
            seller_name,
            buyer_account,
            seller_account,
            amount_transferred: amount,
            status,
            updated_date,
            deadline_date,
            buyer_bank_sign: parse_sign_flag("buyerBank_sign", buyer_bank_sign)?,
            buyer_bank_name,
            seller_bank_name,
        })
    }
}

fn fixed<const N: usize>(args: &[String]) -> Result<[&str; N], LedgerError> {
    let fields: &[String; N] = args.try_into().map_err(|_| {
        LedgerError::invalid_argument(format!(
            "Expecting {} payment fields, got {}",
            N,
            args.len()
        ))
    })?;
    Ok(fields.each_ref().map(String::as_str))
}

impl StoredRecord for Payment {
    const KIND: RecordKind = RecordKind::Payment;

    fn key(&self) -> &str {
        &self.payment_id
    }
}

/// Party name fields a payment can be queried by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentParty {
    Buyer,
    Seller,
}

impl PaymentParty {
    pub fn field_name(&self) -> &'static str {
        match self {
            PaymentParty::Buyer => "buyerName",
            PaymentParty::Seller => "sellerName",
        }
    }
}
