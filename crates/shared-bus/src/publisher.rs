//! # Event Publisher
//!
//! The sending half of the bus. Publishing never blocks and never fails:
//! an event nobody is watching is counted and discarded.

use crate::events::{EventFilter, LedgerEvent};
use crate::subscriber::Subscription;
use crate::DEFAULT_CHANNEL_CAPACITY;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::trace;

/// Sink for ledger notifications.
///
/// Synchronous so handlers can emit from plain functions; observers pull from
/// the channel at their own pace.
pub trait EventPublisher: Send + Sync {
    /// Emit `event`, returning how many live subscriptions were handed a copy.
    fn publish(&self, event: LedgerEvent) -> usize;

    /// Events emitted since construction, observed or not.
    fn events_published(&self) -> u64;
}

/// Broadcast-backed bus shared by the dispatcher and any number of observers.
pub struct InMemoryEventBus {
    sender: broadcast::Sender<LedgerEvent>,
    published: AtomicU64,
    capacity: usize,
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Buffer at most `capacity` events per subscription. Zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Watch events matching `filter`, starting with the next one published.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        trace!(topics = ?filter.topics, failures_only = filter.failures_only, "subscribed");
        Subscription::new(self.sender.subscribe(), filter)
    }

    /// Live subscriptions, whatever their filter.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: LedgerEvent) -> usize {
        self.published.fetch_add(1, Ordering::Relaxed);

        let name = event.name();
        let function = event.function().to_string();
        let correlation_id = event.correlation_id();
        let receivers = self.sender.send(event).unwrap_or(0);

        trace!(event = name, %function, %correlation_id, receivers, "event published");
        receivers
    }

    fn events_published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}
