//! # Agreement Workflow Engine (tl-03)
//!
//! Owns the Agreement record, the fraud gate on creation and the
//! signature-driven approval state machine.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Fraud Gate | No agreement is stored whose buyer or seller is fraud-listed at creation |
//! | 2 | Creation Verbatim | Create stores flags and status exactly as supplied |
//! | 3 | Recompute On Update | Update applies auto-approval, then the ordered status rules |
//! | 4 | Idempotent Delete | Deleting an absent agreement succeeds |
//!
//! ## Crate Structure
//!
//! - `domain/` - `Agreement`, approval rules, party roles
//! - `ports/` - `AgreementWorkflowApi`
//! - `service.rs` - `AgreementWorkflowService` over a shared store
//! - `ipc/` - `AgreementHandler` for the named invocation surface

pub mod domain;
pub mod ipc;
pub mod ports;
pub mod service;

pub use domain::{
    Agreement, ApprovalStatus, PartyField, PartyRole, AGREEMENT_ARITY, AGREEMENT_FIELDS,
};
pub use ipc::AgreementHandler;
pub use ports::inbound::AgreementWorkflowApi;
pub use service::AgreementWorkflowService;
