//! # Event Subscriber

use crate::events::{EventFilter, LedgerEvent};
use thiserror::Error;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::broadcast::Receiver;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("Event bus closed")]
    Closed,
}

/// An observer's view of the bus, narrowed by an [`EventFilter`].
///
/// A subscription that falls more than the bus capacity behind skips the
/// oldest events; [`Subscription::missed`] reports how many.
pub struct Subscription {
    receiver: Receiver<LedgerEvent>,
    filter: EventFilter,
    missed: u64,
}

impl Subscription {
    pub(crate) fn new(receiver: Receiver<LedgerEvent>, filter: EventFilter) -> Self {
        Self {
            receiver,
            filter,
            missed: 0,
        }
    }

    /// Wait for the next matching event. `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<LedgerEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.filter.matches(&event) => return Some(event),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => self.record_lag(skipped),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// The next matching event if one is already buffered.
    pub fn try_recv(&mut self) -> Result<Option<LedgerEvent>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Ok(_) => {}
                Err(TryRecvError::Lagged(skipped)) => self.record_lag(skipped),
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Closed) => return Err(SubscriptionError::Closed),
            }
        }
    }

    /// Every matching event currently buffered, oldest first.
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::iter::from_fn(|| self.try_recv().ok().flatten()).collect()
    }

    #[must_use]
    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// Events skipped because this subscription lagged behind.
    #[must_use]
    pub fn missed(&self) -> u64 {
        self.missed
    }

    fn record_lag(&mut self, skipped: u64) {
        self.missed += skipped;
        debug!(skipped, total = self.missed, "subscription lagged");
    }
}
