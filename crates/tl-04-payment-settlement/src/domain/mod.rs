pub mod account;
pub mod payment;

pub use account::{parse_amount, AccountInfo, BUYER_ACCOUNT_NUMBER, SELLER_ACCOUNT_NUMBER};
pub use payment::{Payment, PaymentParty, PAYMENT_CREATE_ARITY, PAYMENT_UPDATE_ARITY};
