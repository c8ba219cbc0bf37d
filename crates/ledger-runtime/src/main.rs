//! # Trade Ledger Runtime
//!
//! Starts the ledger and serves invocations as JSON lines on stdin:
//!
//! ```text
//! {"function": "create_agreement", "args": ["A1", "T1", ...]}
//! ```
//!
//! Each line gets one JSON line on stdout: the notice for a write, the
//! document for a query, or the error payload. Ledger events are logged.
//!
//! ## Startup Sequence
//!
//! 1. Install logging (`TL_LOG`, default `info`)
//! 2. Load and validate configuration
//! 3. Open storage and lock the data directory
//! 4. Run `init` if configured or if the ledger is fresh
//! 5. Serve until stdin closes or Ctrl+C

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use ledger_runtime::config::LoggingConfig;
use ledger_runtime::{load_config, LedgerRuntime};
use shared_bus::{EventFilter, Subscription};
use shared_types::errors::{ErrorPayload, LedgerError};
use shared_types::ipc::{Invocation, InvocationResponse};

fn install_logging() -> Result<()> {
    let filter = match EnvFilter::try_from_env("TL_LOG") {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(LoggingConfig::default().filter)
            .context("default log filter is invalid")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
    Ok(())
}

fn render(outcome: Result<InvocationResponse, LedgerError>) -> Result<String> {
    let line = match outcome {
        Ok(InvocationResponse::Acknowledged(notice)) => serde_json::to_string(&notice)?,
        Ok(InvocationResponse::Document(document)) => document.to_string(),
        Err(err) => serde_json::to_string(&ErrorPayload::from(&err))?,
    };
    Ok(line)
}

async fn log_events(mut subscription: Subscription) {
    while let Some(event) = subscription.recv().await {
        info!(
            event = event.name(),
            function = event.function(),
            topic = ?event.topic(),
            correlation_id = %event.correlation_id(),
            payload = %event.payload_json(),
            "[runtime] Ledger event"
        );
    }
}

async fn serve(runtime: &LedgerRuntime) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = match serde_json::from_str::<Invocation>(line) {
            Ok(invocation) => runtime.dispatch(&invocation),
            Err(e) => {
                warn!("[runtime] Malformed invocation: {}", e);
                Err(LedgerError::invalid_argument(format!(
                    "Malformed invocation: {}",
                    e
                )))
            }
        };
        println!("{}", render(outcome)?);
    }

    debug!("[runtime] stdin closed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    install_logging()?;

    let config = load_config();
    info!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        reset_on_start = config.bootstrap.reset_on_start,
        "Starting trade ledger"
    );

    let runtime = LedgerRuntime::start(&config).context("ledger failed to start")?;
    let events = tokio::spawn(log_events(runtime.subscribe(EventFilter::all())));

    info!("Ledger is serving invocations on stdin. Press Ctrl+C to stop.");
    tokio::select! {
        served = serve(&runtime) => served?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl+C")?;
            info!("Shutdown signal received");
        }
    }

    events.abort();
    info!("Trade ledger stopped");
    Ok(())
}
