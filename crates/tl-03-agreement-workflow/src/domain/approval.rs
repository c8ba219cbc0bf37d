//! # Approval Rules
//!
//! Applied on every agreement update, in this order:
//!
//! 1. Auto-approval: agreements in an auto-approved industry get the seller
//!    bank's signature, and the buyer bank's too when the total value is at
//!    most [`AUTO_APPROVAL_LIMIT`].
//! 2. Status derivation: [`STATUS_RULES`] evaluated top to bottom against the
//!    `(buyerBank, seller, sellerBank)` flags. The last matching rule wins; if
//!    none matches the caller-supplied status stands.

use crate::domain::agreement::Agreement;
use serde_json::{json, Value};
use shared_types::errors::LedgerError;

/// Industries whose agreements the banks approve automatically.
pub const AUTO_APPROVED_INDUSTRIES: [&str; 2] = ["Books", "Mobiles & Tablets"];

/// Highest total value the buyer bank approves without review.
pub const AUTO_APPROVAL_LIMIT: i64 = 10_000;

pub mod status {
    pub const CREATED: &str = "Created";
    pub const APPROVED_BY_BUYER_BANK: &str = "Approved By Buyer Bank";
    pub const APPROVED_BY_SELLER: &str = "Approved By Seller";
    pub const APPROVED_BY_SELLER_BANK: &str = "Approved By Seller Bank";
}

/// One row of the status table.
#[derive(Debug, Clone, Copy)]
pub struct StatusRule {
    pub buyer_bank_sign: bool,
    pub seller_sign: bool,
    pub seller_bank_sign: bool,
    pub status: &'static str,
}

impl StatusRule {
    fn matches(&self, agreement: &Agreement) -> bool {
        agreement.buyer_bank_sign == self.buyer_bank_sign
            && agreement.seller_sign == self.seller_sign
            && agreement.seller_bank_sign == self.seller_bank_sign
    }
}

pub const STATUS_RULES: [StatusRule; 3] = [
    StatusRule {
        buyer_bank_sign: true,
        seller_sign: false,
        seller_bank_sign: false,
        status: status::APPROVED_BY_BUYER_BANK,
    },
    StatusRule {
        buyer_bank_sign: true,
        seller_sign: true,
        seller_bank_sign: false,
        status: status::APPROVED_BY_SELLER,
    },
    StatusRule {
        buyer_bank_sign: true,
        seller_sign: true,
        seller_bank_sign: true,
        status: status::APPROVED_BY_SELLER_BANK,
    },
];

pub fn is_auto_approved_industry(industry: &str) -> bool {
    AUTO_APPROVED_INDUSTRIES.contains(&industry)
}

/// Parse `total_value` as an integer.
///
/// # Errors
///
/// `InvalidArgument` if it is not an integer.
pub fn parse_total_value(agreement: &Agreement) -> Result<i64, LedgerError> {
    agreement.total_value.parse::<i64>().map_err(|_| {
        LedgerError::invalid_argument(format!(
            "total_value must be an integer, got {:?}",
            agreement.total_value
        ))
    })
}

/// Set the bank signatures granted automatically.
pub fn apply_auto_approval(agreement: &mut Agreement) -> Result<(), LedgerError> {
    let total_value = parse_total_value(agreement)?;
    if !is_auto_approved_industry(&agreement.industry) {
        return Ok(());
    }

    agreement.seller_bank_sign = true;
    if total_value <= AUTO_APPROVAL_LIMIT {
        agreement.buyer_bank_sign = true;
    }
    Ok(())
}

/// Status implied by the current flags, if any rule matches.
pub fn derive_status(agreement: &Agreement) -> Option<&'static str> {
    STATUS_RULES
        .iter()
        .filter(|rule| rule.matches(agreement))
        .last()
        .map(|rule| rule.status)
}

/// Auto-approval followed by status derivation.
///
/// # Errors
///
/// `InvalidArgument` if `total_value` is not an integer. The agreement is
/// left untouched in that case.
pub fn recompute(agreement: &mut Agreement) -> Result<(), LedgerError> {
    apply_auto_approval(agreement)?;
    if let Some(derived) = derive_status(agreement) {
        agreement.status = derived.to_string();
    }
    Ok(())
}

/// Signing parties, in the priority used to resolve a user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    Seller,
    Buyer,
    BuyerBank,
    SellerBank,
}

impl PartyRole {
    pub const PRIORITY: [PartyRole; 4] = [
        PartyRole::Seller,
        PartyRole::Buyer,
        PartyRole::BuyerBank,
        PartyRole::SellerBank,
    ];

    /// The first role whose party name equals `user`.
    pub fn resolve(agreement: &Agreement, user: &str) -> Option<PartyRole> {
        Self::PRIORITY
            .into_iter()
            .find(|role| role.party_name(agreement) == user)
    }

    pub fn party_name<'a>(&self, agreement: &'a Agreement) -> &'a str {
        match self {
            PartyRole::Seller => &agreement.seller_name,
            PartyRole::Buyer => &agreement.buyer_name,
            PartyRole::BuyerBank => &agreement.buyer_bank_name,
            PartyRole::SellerBank => &agreement.seller_bank_name,
        }
    }

    pub fn has_signed(&self, agreement: &Agreement) -> bool {
        match self {
            PartyRole::Seller => agreement.seller_sign,
            PartyRole::Buyer => agreement.buyer_sign,
            PartyRole::BuyerBank => agreement.buyer_bank_sign,
            PartyRole::SellerBank => agreement.seller_bank_sign,
        }
    }

    /// Persisted name of this role's signature flag.
    pub fn sign_field(&self) -> &'static str {
        match self {
            PartyRole::Seller => "seller_sign",
            PartyRole::Buyer => "buyer_sign",
            PartyRole::BuyerBank => "buyerBank_sign",
            PartyRole::SellerBank => "sellerBank_sign",
        }
    }
}

/// One party's signature on one agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalStatus {
    pub agreement_id: String,
    pub role: PartyRole,
    pub signed: bool,
}

impl ApprovalStatus {
    pub fn of(agreement: &Agreement, role: PartyRole) -> Self {
        Self {
            agreement_id: agreement.agreement_id.clone(),
            role,
            signed: role.has_signed(agreement),
        }
    }

    /// `{"agreementId": ..., "<role>_sign": "true"|"false"}`
    pub fn to_document(&self) -> Value {
        let mut doc = json!({ "agreementId": self.agreement_id });
        doc[self.role.sign_field()] = Value::String(self.signed.to_string());
        doc
    }
}
