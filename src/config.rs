//! Configuration for Cashbook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::Result;
use crate::persistence::FileStore;
use crate::store::ItemStore;

/// Main configuration for a Cashbook instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the persisted item lists
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── PrivateItems.cash
    ///     └── BusinessItems.cash
    pub data_dir: PathBuf,

    /// Sync strategy: whether to fsync after each write
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// How load and save failures are reported
    pub error_policy: ErrorPolicy,
}

/// File sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStrategy {
    /// fsync after every write (safest, slowest)
    #[default]
    EveryWrite,

    /// Leave flushing to the OS
    Never,
}

/// Policy for load/save failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log and carry on: corrupt data loads as empty, failed writes are dropped
    #[default]
    Lenient,

    /// Return `DataCorrupt` / `PersistenceWriteFailed` to the caller
    Strict,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./cashbook_data"),
            sync_strategy: SyncStrategy::default(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Open a file-backed item store using this configuration
    pub fn open_store(&self) -> Result<ItemStore<FileStore>> {
        let files = FileStore::open(&self.data_dir, self.sync_strategy)?;
        ItemStore::with_policy(files, self.error_policy)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the error policy
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.error_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
