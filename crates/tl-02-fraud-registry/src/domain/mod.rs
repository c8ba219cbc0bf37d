//! Domain layer.

pub mod entry;
