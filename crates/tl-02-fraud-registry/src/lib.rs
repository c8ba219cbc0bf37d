//! # Fraud Registry (tl-02)
//!
//! An append-only list of fraud-listed party names. Agreement creation
//! screens both counterparties against it before anything is written.
//!
//! The operations take the backend directly so the agreement workflow can
//! screen and write under one lock.

pub mod domain;
pub mod service;

pub use domain::entry::{FraudEntry, FRAUD_NAME_FIELD};
pub use service::FraudList;
