//! # Cashbook
//!
//! A small expense tracker with:
//! - Two independent item lists ("private" and "business")
//! - Synchronous persistence of the affected list on every mutation
//! - Pluggable key-value persistence (in-memory or checksummed files)
//! - Lenient or strict handling of load/save failures
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Presentation Layer                          │
//! │                (cashbook CLI, any UI)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ append / remove_at / items
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     ItemStore                                │
//! │        (private + business lists, observers)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ encode_items / decode_items
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ MemoryStore │          │  FileStore  │
//!   │  (RwLock)   │          │ (CRC files) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod codec;
pub mod persistence;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CashError, Result};
pub use config::{Config, ErrorPolicy, SyncStrategy};
pub use model::{Category, Collection, Item};
pub use persistence::{FileStore, MemoryStore, PersistenceAdapter};
pub use store::{ItemStore, LoadOutcome, LoadReport, SubscriptionId};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Cashbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
