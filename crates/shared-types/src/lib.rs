//! # Shared Types Crate
//!
//! Types every ledger subsystem agrees on.
//!
//! ## Design Principles
//!
//! - **Single Error Taxonomy**: every failure reaching a caller is a
//!   [`LedgerError`] carrying one categorical [`ErrorKind`].
//! - **String Boundary**: operations are invoked by name with positional string
//!   arguments ([`Invocation`]); typed parsing happens inside each subsystem.
//! - **Key-Addressed Records**: each persisted record type is identified by a
//!   [`RecordKind`] that also names its key index.

pub mod entities;
pub mod errors;
pub mod ipc;

pub use entities::*;
pub use errors::*;
pub use ipc::*;
