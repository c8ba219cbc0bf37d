//! # Ledger Configuration
//!
//! Defaults for every runtime parameter, with environment overrides.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TL_STORAGE_BACKEND` | `storage.backend` (`memory`, `file`, `rocksdb`) |
//! | `TL_DATA_DIR` | `storage.data_dir` |
//! | `TL_SEED_BALANCE` | `bootstrap.seed_balance` |
//! | `TL_RESET_ON_START` | `bootstrap.reset_on_start` |
//! | `TL_EVENT_CAPACITY` | `events.channel_capacity` |
//! | `TL_LOG` | `logging.filter` |

use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    pub storage: StorageConfig,
    pub bootstrap: BootstrapConfig,
    pub events: EventConfig,
    pub logging: LoggingConfig,
}

impl LedgerConfig {
    /// Reject values the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Decimal::from_str(&self.bootstrap.seed_balance).is_err() {
            return Err(ConfigError::InvalidSeedBalance(
                self.bootstrap.seed_balance.clone(),
            ));
        }
        if self.events.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        #[cfg(not(feature = "rocksdb"))]
        if self.storage.backend == StorageBackend::RocksDb {
            return Err(ConfigError::BackendUnavailable("rocksdb"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Seed balance must be a decimal, got {0:?}")]
    InvalidSeedBalance(String),

    #[error("Event channel capacity must be at least 1")]
    ZeroChannelCapacity,

    #[error("Storage backend {0} is not compiled in; rebuild with --features {0}")]
    BackendUnavailable(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
    RocksDb,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "rocksdb" => Ok(StorageBackend::RocksDb),
            other => Err(format!("unknown storage backend {:?}", other)),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding the data file (or RocksDB directory) and the lock.
    pub data_dir: PathBuf,
    /// Snapshot file name for the file backend.
    pub file_name: String,
    /// fsync every RocksDB write.
    pub sync_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data"),
            file_name: "ledger.db".to_string(),
            sync_writes: true,
        }
    }
}

/// Start-up initialization.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Balance both accounts start with.
    pub seed_balance: String,
    /// Run `init` on every start. When false it runs only if the account
    /// singleton is missing.
    pub reset_on_start: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            seed_balance: "100000.00".to_string(),
            reset_on_start: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventConfig {
    pub channel_capacity: usize,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            channel_capacity: shared_bus::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> LedgerConfig {
    load_config_from(|name| std::env::var(name).ok())
}

/// Load configuration from an arbitrary variable lookup.
///
/// Unparseable values are logged and ignored.
pub fn load_config_from<F>(lookup: F) -> LedgerConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = LedgerConfig::default();

    if let Some(backend) = lookup("TL_STORAGE_BACKEND") {
        match backend.parse() {
            Ok(b) => config.storage.backend = b,
            Err(e) => warn!("TL_STORAGE_BACKEND ignored: {}", e),
        }
    }
    if let Some(dir) = lookup("TL_DATA_DIR") {
        config.storage.data_dir = PathBuf::from(dir);
    }
    if let Some(sync) = lookup("TL_SYNC_WRITES") {
        match sync.parse() {
            Ok(s) => config.storage.sync_writes = s,
            Err(_) => warn!("TL_SYNC_WRITES must be true or false, got {:?}", sync),
        }
    }
    if let Some(seed) = lookup("TL_SEED_BALANCE") {
        if Decimal::from_str(&seed).is_ok() {
            config.bootstrap.seed_balance = seed;
        } else {
            warn!("TL_SEED_BALANCE ignored: {:?} is not a decimal", seed);
        }
    }
    if let Some(reset) = lookup("TL_RESET_ON_START") {
        match reset.parse() {
            Ok(r) => config.bootstrap.reset_on_start = r,
            Err(_) => warn!("TL_RESET_ON_START must be true or false, got {:?}", reset),
        }
    }
    if let Some(capacity) = lookup("TL_EVENT_CAPACITY") {
        match capacity.parse::<usize>() {
            Ok(c) if c > 0 => config.events.channel_capacity = c,
            _ => warn!("TL_EVENT_CAPACITY must be a positive integer, got {:?}", capacity),
        }
    }
    if let Some(filter) = lookup("TL_LOG") {
        config.logging.filter = filter;
    }

    config
}
