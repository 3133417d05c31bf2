//! In-memory key-value store
//!
//! HashMap-based store with RwLock, for tests and ephemeral use.
//! Data is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::error::{CashError, Result};

use super::PersistenceAdapter;

/// In-memory implementation of `PersistenceAdapter`
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored values by key
    data: RwLock<HashMap<String, Vec<u8>>>,

    /// When set, every `set` fails without touching `data`
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Store raw bytes directly, bypassing write failure simulation
    pub fn raw_put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.data.write().insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl PersistenceAdapter for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CashError::PersistenceWriteFailed {
                key: key.to_string(),
                reason: "writes disabled".to_string(),
            });
        }

        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
