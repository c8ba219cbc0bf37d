//! # Trade-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion: index scans, settlement
//! └── src/integration/  # Flows through the runtime dispatcher
//!     ├── fixtures.rs   # Positional argument builders
//!     ├── trade_flow.rs # Fraud gate to settlement, end to end
//!     ├── properties.rs # Uniqueness, index consistency, round trip
//!     ├── errors.rs     # Arity, unknown functions, bad values
//!     └── events.rs     # evtsender / errEvent emission
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tl-tests
//! cargo test -p tl-tests integration::properties::
//! cargo bench -p tl-tests
//! ```

pub mod integration;
