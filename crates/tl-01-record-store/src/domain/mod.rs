//! Domain layer: pure record-store logic with no I/O.

pub mod errors;
pub mod index;
pub mod record;
