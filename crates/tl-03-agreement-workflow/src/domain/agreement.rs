//! # Agreement Record
//!
//! The central trade contract. Persisted as a flat object of string fields;
//! the four signature flags are typed `bool` in memory and stored as the
//! literal tokens `"true"` / `"false"`.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::entities::{parse_sign_flag, RecordKind};
use shared_types::errors::LedgerError;
use tl_01_record_store::StoredRecord;

/// Positional argument count of `create_agreement` and `update_agreement`.
pub const AGREEMENT_ARITY: usize = 26;

/// Persisted field names, in positional argument order.
pub const AGREEMENT_FIELDS: [&str; AGREEMENT_ARITY] = [
    "agreementId",
    "transId",
    "agreement_status",
    "buyer_name",
    "seller_name",
    "shipper_name",
    "bb_name",
    "sb_name",
    "agreementPortAuth_name",
    "agreementCU_date",
    "item_id",
    "item_name",
    "item_quantity",
    "total_value",
    "delivery_date",
    "extraCharges",
    "shipper_fees",
    "document_name",
    "document_url",
    "tc_text",
    "buyer_sign",
    "buyerBank_sign",
    "seller_sign",
    "sellerBank_sign",
    "industry",
    "goodsPrice",
];

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agreement {
    #[serde(rename = "agreementId")]
    pub agreement_id: String,
    #[serde(rename = "transId")]
    pub trans_id: String,
    #[serde(rename = "agreement_status")]
    pub status: String,
    pub buyer_name: String,
    pub seller_name: String,
    pub shipper_name: String,
    #[serde(rename = "bb_name")]
    pub buyer_bank_name: String,
    #[serde(rename = "sb_name")]
    pub seller_bank_name: String,
    #[serde(rename = "agreementPortAuth_name")]
    pub port_authority_name: String,
    #[serde(rename = "agreementCU_date")]
    pub updated_date: String,
    pub item_id: String,
    pub item_name: String,
    pub item_quantity: String,
    /// Integer-valued; parsed only when auto-approval is evaluated.
    pub total_value: String,
    pub delivery_date: String,
    #[serde(rename = "extraCharges")]
    pub extra_charges: String,
    pub shipper_fees: String,
    pub document_name: String,
    pub document_url: String,
    pub tc_text: String,
    #[serde_as(as = "DisplayFromStr")]
    pub buyer_sign: bool,
    #[serde(rename = "buyerBank_sign")]
    #[serde_as(as = "DisplayFromStr")]
    pub buyer_bank_sign: bool,
    #[serde_as(as = "DisplayFromStr")]
    pub seller_sign: bool,
    #[serde(rename = "sellerBank_sign")]
    #[serde_as(as = "DisplayFromStr")]
    pub seller_bank_sign: bool,
    pub industry: String,
    #[serde(rename = "goodsPrice")]
    pub goods_price: String,
}

impl Agreement {
    /// Build an agreement from the 26 positional invocation arguments.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on a wrong argument count, an empty `agreementId`,
    /// or a signature flag other than `"true"` / `"false"`.
    pub fn from_args(args: &[String]) -> Result<Self, LedgerError> {
        let fields: &[String; AGREEMENT_ARITY] = args.try_into().map_err(|_| {
            LedgerError::invalid_argument(format!(
                "Expecting {} agreement fields, got {}",
                AGREEMENT_ARITY,
                args.len()
            ))
        })?;
        let [agreement_id, trans_id, status, buyer_name, seller_name, shipper_name, buyer_bank_name, seller_bank_name, port_authority_name, updated_date, item_id, item_name, item_quantity, total_value, delivery_date, extra_charges, shipper_fees, document_name, document_url, tc_text, buyer_sign, buyer_bank_sign, seller_sign, seller_bank_sign, industry, goods_price] =
            fields;

        if agreement_id.is_empty() {
            return Err(LedgerError::invalid_argument(
                "agreementId must be a non-empty string",
            ));
        }

        Ok(Self {
            agreement_id: agreement_id.clone(),
            trans_id: trans_id.clone(),
            status: status.clone(),
            buyer_name: buyer_name.clone(),
            seller_name: seller_name.clone(),
            shipper_name: shipper_name.clone(),
            buyer_bank_name: buyer_bank_name.clone(),
            seller_bank_name: seller_bank_name.clone(),
            port_authority_name: port_authority_name.clone(),
            updated_date: updated_date.clone(),
            item_id: item_id.clone(),
            item_name: item_name.clone(),
            item_quantity: item_quantity.clone(),
            total_value: total_value.clone(),
            delivery_date: delivery_date.clone(),
            extra_charges: extra_charges.clone(),
            shipper_fees: shipper_fees.clone(),
            document_name: document_name.clone(),
            document_url: document_url.clone(),
            tc_text: tc_text.clone(),
            buyer_sign: parse_sign_flag("buyer_sign", buyer_sign)?,
            buyer_bank_sign: parse_sign_flag("buyerBank_sign", buyer_bank_sign)?,
            seller_sign: parse_sign_flag("seller_sign", seller_sign)?,
            seller_bank_sign: parse_sign_flag("sellerBank_sign", seller_bank_sign)?,
            industry: industry.clone(),
            goods_price: goods_price.clone(),
        })
    }
}

impl StoredRecord for Agreement {
    const KIND: RecordKind = RecordKind::Agreement;

    fn key(&self) -> &str {
        &self.agreement_id
    }
}

/// Party name fields an agreement can be queried by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyField {
    Buyer,
    Seller,
    Shipper,
    BuyerBank,
    SellerBank,
    PortAuthority,
}

impl PartyField {
    /// Persisted field compared by the scan.
    pub fn field_name(&self) -> &'static str {
        match self {
            PartyField::Buyer => "buyer_name",
            PartyField::Seller => "seller_name",
            PartyField::Shipper => "shipper_name",
            PartyField::BuyerBank => "bb_name",
            PartyField::SellerBank => "sb_name",
            PartyField::PortAuthority => "agreementPortAuth_name",
        }
    }
}
