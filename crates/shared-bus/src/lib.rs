//! # Shared Bus - Ledger Event Notifications
//!
//! Every invocation ends in exactly one notification: `evtsender` for a
//! completed write, `errEvent` for a failure. The bus fans these out to any
//! number of observers.
//!
//! ```text
//! ┌──────────────┐   publish()   ┌──────────────┐   subscribe()   ┌──────────┐
//! │  Dispatcher  │ ────────────→ │  Event Bus   │ ──────────────→ │ Observer │
//! └──────────────┘               └──────────────┘                 └──────────┘
//! ```
//!
//! Events are observability only. A dropped or unobserved event never changes
//! ledger state or the outcome returned to the caller.

#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

pub use events::{EventFilter, EventTopic, LedgerEvent, ERROR_EVENT, SUCCESS_EVENT};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before the slowest one lags.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
