//! # Account Ledger
//!
//! The two-account balance singleton. Balances are decimals in memory and
//! decimal strings at rest.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::errors::LedgerError;
use std::str::FromStr;

pub const BUYER_ACCOUNT_NUMBER: &str = "965832147012";
pub const SELLER_ACCOUNT_NUMBER: &str = "741258963512";

/// Decimal places of a settled balance.
pub const BALANCE_SCALE: u32 = 2;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(rename = "buyerAccountNumber")]
    pub buyer_account_number: String,
    #[serde(rename = "buyerAccountBalance")]
    #[serde_as(as = "DisplayFromStr")]
    pub buyer_account_balance: Decimal,
    #[serde(rename = "sellerAccountNumber")]
    pub seller_account_number: String,
    #[serde(rename = "sellerAccountBalance")]
    #[serde_as(as = "DisplayFromStr")]
    pub seller_account_balance: Decimal,
}

impl AccountInfo {
    /// Both fixed accounts holding `seed`, at balance scale.
    pub fn seeded(seed: Decimal) -> Self {
        let balance = to_balance_scale(seed);
        Self {
            buyer_account_number: BUYER_ACCOUNT_NUMBER.to_string(),
            buyer_account_balance: balance,
            seller_account_number: SELLER_ACCOUNT_NUMBER.to_string(),
            seller_account_balance: balance,
        }
    }

    /// Move `amount` from the buyer to the seller. Overdraft is allowed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either balance would overflow.
    pub fn settled(&self, amount: Decimal) -> Result<Self, LedgerError> {
        let overflow = || LedgerError::invalid_argument(format!("Settling {} overflows an account balance", amount));

        let buyer = self.buyer_account_balance.checked_sub(amount).ok_or_else(overflow)?;
        let seller = self.seller_account_balance.checked_add(amount).ok_or_else(overflow)?;

        Ok(Self {
            buyer_account_balance: to_balance_scale(buyer),
            seller_account_balance: to_balance_scale(seller),
            ..self.clone()
        })
    }
}

fn to_balance_scale(value: Decimal) -> Decimal {
    let mut value = value.round_dp(BALANCE_SCALE);
    value.rescale(BALANCE_SCALE);
    value
}

/// Parse a monetary string argument.
///
/// # Errors
///
/// `InvalidArgument` naming `field` if `value` is not a decimal.
pub fn parse_amount(field: &str, value: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(value.trim()).map_err(|e| {
        LedgerError::invalid_argument(format!("{} must be a decimal, got {:?}: {}", field, value, e))
    })
}
