//! # Account Ledger & Payment Settlement (tl-04)
//!
//! Payments between the two fixed accounts, and the balance singleton they
//! settle against.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Settle On Signature | An update carrying the buyer bank's signature moves `amountTransferred` from buyer to seller |
//! | 2 | Single Batch | The settled account and the payment are written in one atomic batch |
//! | 3 | Overdraft Allowed | Balances are not bounds-checked |
//! | 4 | Two Decimals | Settled balances are stored with two decimal places |
//!
//! ## Crate Structure
//!
//! - `domain/` - `Payment`, `AccountInfo`, settlement arithmetic
//! - `ports/` - `PaymentSettlementApi`
//! - `service.rs` - `PaymentSettlementService` over a shared store
//! - `ipc/` - `PaymentHandler`

pub mod domain;
pub mod ipc;
pub mod ports;
pub mod service;

pub use domain::{AccountInfo, Payment, PaymentParty, BUYER_ACCOUNT_NUMBER, SELLER_ACCOUNT_NUMBER};
pub use ipc::PaymentHandler;
pub use ports::inbound::{PaymentSettlementApi, PaymentUpdate};
pub use service::PaymentSettlementService;
