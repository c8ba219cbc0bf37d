//! # Ledger Events
//!
//! Out-of-band notifications emitted after every invocation. Observers may
//! watch them; no ledger operation depends on an event being delivered.

use serde::{Deserialize, Serialize};
use shared_types::errors::ErrorPayload;
use shared_types::ipc::Notice;
use uuid::Uuid;

/// Event name for successful writes.
pub const SUCCESS_EVENT: &str = "evtsender";

/// Event name for failed invocations.
pub const ERROR_EVENT: &str = "errEvent";

/// All events that can be published to the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A write completed.
    Succeeded {
        correlation_id: Uuid,
        topic: EventTopic,
        function: String,
        notice: Notice,
    },

    /// An invocation failed.
    Failed {
        correlation_id: Uuid,
        topic: EventTopic,
        function: String,
        payload: ErrorPayload,
    },
}

impl LedgerEvent {
    pub fn succeeded(topic: EventTopic, function: impl Into<String>, notice: Notice) -> Self {
        LedgerEvent::Succeeded {
            correlation_id: Uuid::new_v4(),
            topic,
            function: function.into(),
            notice,
        }
    }

    pub fn failed(topic: EventTopic, function: impl Into<String>, payload: ErrorPayload) -> Self {
        LedgerEvent::Failed {
            correlation_id: Uuid::new_v4(),
            topic,
            function: function.into(),
            payload,
        }
    }

    /// The wire event name (`evtsender` or `errEvent`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LedgerEvent::Succeeded { .. } => SUCCESS_EVENT,
            LedgerEvent::Failed { .. } => ERROR_EVENT,
        }
    }

    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            LedgerEvent::Succeeded { topic, .. } | LedgerEvent::Failed { topic, .. } => *topic,
        }
    }

    #[must_use]
    pub fn correlation_id(&self) -> Uuid {
        match self {
            LedgerEvent::Succeeded { correlation_id, .. }
            | LedgerEvent::Failed { correlation_id, .. } => *correlation_id,
        }
    }

    #[must_use]
    pub fn function(&self) -> &str {
        match self {
            LedgerEvent::Succeeded { function, .. } | LedgerEvent::Failed { function, .. } => {
                function
            }
        }
    }

    /// The JSON body observers receive alongside the event name.
    #[must_use]
    pub fn payload_json(&self) -> serde_json::Value {
        let encoded = match self {
            LedgerEvent::Succeeded { notice, .. } => serde_json::to_value(notice),
            LedgerEvent::Failed { payload, .. } => serde_json::to_value(payload),
        };
        encoded.unwrap_or(serde_json::Value::Null)
    }
}

/// Event topics for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Agreement workflow and fraud registry (tl-03).
    Agreements,
    /// Payments and account settlement (tl-04).
    Payments,
    /// Bootstrap and dispatch failures.
    Runtime,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Only deliver failures.
    pub failures_only: bool,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            failures_only: false,
        }
    }

    /// Create a filter that only passes `errEvent` notifications.
    #[must_use]
    pub fn failures() -> Self {
        Self {
            topics: Vec::new(),
            failures_only: true,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &LedgerEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let kind_match = !self.failures_only || matches!(event, LedgerEvent::Failed { .. });

        topic_match && kind_match
    }
}
