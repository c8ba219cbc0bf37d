pub mod handler;

pub use handler::{functions, AgreementHandler, AGREEMENT_REF, FRAUD_REF};
