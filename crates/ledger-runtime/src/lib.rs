//! # Ledger Runtime
//!
//! Hosts the trade ledger: one key-value backend shared by every subsystem,
//! a dispatcher that routes named invocations to their handlers, and an
//! event bus that reports the outcome of each.
//!
//! ```text
//! Invocation ──→ Dispatcher ──→ tl-03 AgreementHandler ──┐
//!                    │      ──→ tl-04 PaymentHandler   ──┼──→ SharedStore<LedgerStore>
//!                    │      ──→ Bootstrap (init)       ──┘
//!                    └──→ InMemoryEventBus (evtsender / errEvent)
//! ```
//!
//! ## Modules
//!
//! - `config` - defaults and `TL_*` environment overrides
//! - `storage` - backend selection and the data directory lock
//! - `dispatcher` - function routing and event emission
//! - `bootstrap` - `init` and start-up errors
//! - `runtime` - `LedgerRuntime`, which wires all of the above

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod bootstrap;
pub mod config;
pub mod dispatcher;
pub mod runtime;
pub mod storage;

pub use bootstrap::{Bootstrap, BootstrapError, INIT};
pub use config::{load_config, LedgerConfig};
pub use dispatcher::{DispatchError, Dispatcher};
pub use runtime::LedgerRuntime;
pub use storage::{open_store, LedgerStore, StorageError};
