//! # Ledger Runtime
//!
//! Owns the shared store, the subsystem services, the event bus and the
//! dispatcher. Every subsystem sees the same backend through one lock.

use crate::bootstrap::{Bootstrap, BootstrapError, INIT};
use crate::config::LedgerConfig;
use crate::dispatcher::Dispatcher;
use crate::storage::{open_store, DataDirLock, LedgerStore};
use shared_bus::{EventFilter, EventTopic, InMemoryEventBus, Subscription};
use shared_types::errors::LedgerError;
use shared_types::ipc::{Invocation, InvocationResponse};
use std::sync::Arc;
use tl_01_record_store::{shared, KeyValueStore, SharedStore};
use tl_03_agreement_workflow::{AgreementHandler, AgreementWorkflowService};
use tl_04_payment_settlement::{PaymentHandler, PaymentSettlementService};
use tracing::info;

pub struct LedgerRuntime<S: KeyValueStore + 'static = LedgerStore> {
    store: SharedStore<S>,
    bus: Arc<InMemoryEventBus>,
    dispatcher: Dispatcher,
    agreements: Arc<AgreementWorkflowService<S>>,
    payments: Arc<PaymentSettlementService<S>>,
    _lock: Option<DataDirLock>,
}

impl<S: KeyValueStore + 'static> std::fmt::Debug for LedgerRuntime<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerRuntime").finish_non_exhaustive()
    }
}

impl LedgerRuntime<LedgerStore> {
    /// Open the configured backend, wire every handler and run start-up
    /// initialization.
    pub fn start(config: &LedgerConfig) -> Result<Self, BootstrapError> {
        config.validate()?;
        let opened = open_store(&config.storage)?;
        Self::assemble(opened.store, opened.lock, config)
    }
}

impl<S: KeyValueStore + 'static> LedgerRuntime<S> {
    /// Run on a caller-supplied backend. No data directory lock is taken.
    pub fn with_store(store: S, config: &LedgerConfig) -> Result<Self, BootstrapError> {
        config.validate()?;
        Self::assemble(store, None, config)
    }

    fn assemble(
        store: S,
        lock: Option<DataDirLock>,
        config: &LedgerConfig,
    ) -> Result<Self, BootstrapError> {
        let store = shared(store);
        let bus = Arc::new(InMemoryEventBus::with_capacity(config.events.channel_capacity));

        let agreements = Arc::new(AgreementWorkflowService::new(store.clone()));
        let payments = Arc::new(PaymentSettlementService::new(store.clone()));
        let bootstrap = Arc::new(Bootstrap::new(store.clone(), agreements.clone(), payments.clone()));

        let mut dispatcher = Dispatcher::new(bus.clone());
        dispatcher.register(EventTopic::Runtime, bootstrap.clone())?;
        dispatcher.register(
            EventTopic::Agreements,
            Arc::new(AgreementHandler::new(agreements.clone())),
        )?;
        dispatcher.register(
            EventTopic::Payments,
            Arc::new(PaymentHandler::new(payments.clone())),
        )?;

        if bootstrap.needs_init(config.bootstrap.reset_on_start)? {
            dispatcher.dispatch(&Invocation::new(INIT, [config.bootstrap.seed_balance.as_str()]))?;
        } else {
            info!("[runtime] Existing ledger state kept");
        }

        info!(
            functions = dispatcher.functions().len(),
            "[runtime] Ledger runtime ready"
        );

        Ok(Self {
            store,
            bus,
            dispatcher,
            agreements,
            payments,
            _lock: lock,
        })
    }

    pub fn dispatch(&self, invocation: &Invocation) -> Result<InvocationResponse, LedgerError> {
        self.dispatcher.dispatch(invocation)
    }

    /// Dispatch `function` with positional `args`.
    pub fn invoke<I, A>(&self, function: &str, args: I) -> Result<InvocationResponse, LedgerError>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.dispatch(&Invocation::new(function, args))
    }

    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        self.bus.subscribe(filter)
    }

    pub fn bus(&self) -> &Arc<InMemoryEventBus> {
        &self.bus
    }

    pub fn functions(&self) -> Vec<&'static str> {
        self.dispatcher.functions()
    }

    pub fn agreements(&self) -> &Arc<AgreementWorkflowService<S>> {
        &self.agreements
    }

    pub fn payments(&self) -> &Arc<PaymentSettlementService<S>> {
        &self.payments
    }

    /// The backend every subsystem writes through.
    pub fn store(&self) -> &SharedStore<S> {
        &self.store
    }
}
