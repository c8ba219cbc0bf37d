//! # Invocation Dispatcher
//!
//! Routes a named invocation to the handler that serves it and reports the
//! outcome on the event bus: `evtsender` for a completed write, `errEvent`
//! for any failure. Queries succeed silently.
//!
//! Publishing never changes the result returned to the caller.

use shared_bus::{EventPublisher, EventTopic, LedgerEvent};
use shared_types::errors::{ErrorKind, ErrorPayload, LedgerError};
use shared_types::ipc::{Invocation, InvocationHandler, InvocationResponse};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Function {function} is served by both {existing} and {rejected}")]
    DuplicateFunction {
        function: &'static str,
        existing: &'static str,
        rejected: &'static str,
    },
}

#[derive(Clone)]
struct Route {
    topic: EventTopic,
    handler: Arc<dyn InvocationHandler>,
}

pub struct Dispatcher {
    routes: HashMap<&'static str, Route>,
    publisher: Arc<dyn EventPublisher>,
}

impl Dispatcher {
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            routes: HashMap::new(),
            publisher,
        }
    }

    /// Route every function `handler` serves to it, tagging its events with
    /// `topic`.
    ///
    /// # Errors
    ///
    /// `DuplicateFunction` if a function is already routed. Nothing is
    /// registered in that case.
    pub fn register(
        &mut self,
        topic: EventTopic,
        handler: Arc<dyn InvocationHandler>,
    ) -> Result<(), DispatchError> {
        for &function in handler.functions() {
            if let Some(existing) = self.routes.get(function) {
                return Err(DispatchError::DuplicateFunction {
                    function,
                    existing: existing.handler.name(),
                    rejected: handler.name(),
                });
            }
        }

        for &function in handler.functions() {
            self.routes.insert(
                function,
                Route {
                    topic,
                    handler: Arc::clone(&handler),
                },
            );
        }
        info!(
            handler = handler.name(),
            functions = handler.functions().len(),
            "[runtime] Handler registered"
        );
        Ok(())
    }

    /// Every routed function name, sorted.
    pub fn functions(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.routes.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run one invocation to completion and publish its outcome.
    pub fn dispatch(&self, invocation: &Invocation) -> Result<InvocationResponse, LedgerError> {
        let function = invocation.function.as_str();
        let Some(route) = self.routes.get(function) else {
            let err = LedgerError::invalid_argument(format!(
                "Received unknown function invocation: {}",
                function
            ));
            warn!(function, "[runtime] Unknown function");
            self.publish_failure(EventTopic::Runtime, function, &err);
            return Err(err);
        };

        debug!(
            function,
            handler = route.handler.name(),
            args = invocation.args.len(),
            "[runtime] Dispatching"
        );

        match route.handler.handle(invocation) {
            Ok(response) => {
                if let Some(notice) = response.notice() {
                    let delivered = self.publisher.publish(LedgerEvent::succeeded(
                        route.topic,
                        function,
                        notice.clone(),
                    ));
                    debug!(function, delivered, "[runtime] evtsender published");
                }
                Ok(response)
            }
            Err(err) => {
                if err.kind() == ErrorKind::BackendFailure {
                    error!(function, handler = route.handler.name(), "[runtime] {}", err);
                } else {
                    warn!(function, kind = %err.kind(), "[runtime] {}", err);
                }
                self.publish_failure(route.topic, function, &err);
                Err(err)
            }
        }
    }

    fn publish_failure(&self, topic: EventTopic, function: &str, err: &LedgerError) {
        let delivered = self
            .publisher
            .publish(LedgerEvent::failed(topic, function, ErrorPayload::from(err)));
        debug!(function, delivered, "[runtime] errEvent published");
    }
}
