//! Persistence Module
//!
//! Key-value byte stores that item lists are written to.
//!
//! ## Responsibilities
//! - Read the bytes stored under a key (`None` when absent)
//! - Replace the bytes stored under a key
//!
//! The store owns no schema: it never looks inside the bytes.
//!
//! ## File Format (`FileStore`, one file per key)
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                       │
//! │   Magic: "CASH" (4) | Version: u16 (2) | Len: u32 (4)   │
//! │   CRC32 of payload: u32 (4)                             │
//! ├─────────────────────────────────────────────────────────┤
//! │ Payload (Len bytes)                                     │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

// =============================================================================
// Shared Constants
// =============================================================================

/// Magic bytes identifying a Cashbook value file
pub(crate) const MAGIC: &[u8; 4] = b"CASH";

/// Current value file format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Len (4) + CRC (4) = 14 bytes
pub(crate) const HEADER_SIZE: usize = 14;

// =============================================================================
// Adapter Trait
// =============================================================================

/// Key-value byte store consumed by `ItemStore`
///
/// Methods take `&self`; implementations handle their own interior locking.
pub trait PersistenceAdapter: Send + Sync {
    /// Read the bytes under `key`, `Ok(None)` if nothing was stored
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the bytes under `key`
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for &P {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<P> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}
