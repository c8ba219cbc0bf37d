pub mod agreement;
pub mod approval;

pub use agreement::{Agreement, PartyField, AGREEMENT_ARITY, AGREEMENT_FIELDS};
pub use approval::{recompute, ApprovalStatus, PartyRole};
