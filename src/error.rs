//! Error types for Cashbook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::model::Collection;

/// Result type alias using CashError
pub type Result<T> = std::result::Result<T, CashError>;

/// Unified error type for Cashbook operations
#[derive(Debug, Error)]
pub enum CashError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("Data under key '{key}' is corrupt: {reason}")]
    DataCorrupt { key: String, reason: String },

    #[error("Persisting key '{key}' failed: {reason}")]
    PersistenceWriteFailed { key: String, reason: String },

    #[error("Invalid persistence key: {0}")]
    InvalidKey(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Offset {offset} out of range for {collection} collection of length {len}")]
    OffsetOutOfRange {
        collection: Collection,
        offset: usize,
        len: usize,
    },

    /// A category, collection or similar name could not be parsed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CashError {
    fn from(err: serde_json::Error) -> Self {
        CashError::Serialization(err.to_string())
    }
}
