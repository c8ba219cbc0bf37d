pub mod handler;

pub use handler::{functions, PaymentHandler, PAYMENT_REF};
