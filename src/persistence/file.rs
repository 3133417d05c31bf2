//! File-backed key-value store
//!
//! One checksummed file per key inside a data directory.
//! Writes go to a temp file that is then renamed over the target, so a
//! crash mid-write leaves the previous value intact.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::config::SyncStrategy;
use crate::error::{CashError, Result};

use super::{PersistenceAdapter, HEADER_SIZE, MAGIC, VERSION};

/// Directory-backed implementation of `PersistenceAdapter`
///
/// ## Concurrency:
/// - Reads take no lock (each read opens the file fresh)
/// - Writes are serialized by `write_lock` so temp files never collide
#[derive(Debug)]
pub struct FileStore {
    /// Directory holding one `<key>.cash` file per key
    dir: PathBuf,

    /// Whether to fsync after each write
    sync_strategy: SyncStrategy,

    /// Serializes writes
    write_lock: Mutex<()>,
}

impl FileStore {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const EXTENSION: &'static str = "cash";
    const TEMP_EXTENSION: &'static str = "cash.tmp";

    /// Open or create a store in the given directory
    pub fn open(dir: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        fs::create_dir_all(dir)?;

        tracing::debug!(dir = %dir.display(), ?sync_strategy, "opened file store");

        Ok(Self {
            dir: dir.to_path_buf(),
            sync_strategy,
            write_lock: Mutex::new(()),
        })
    }

    /// Get the data directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, Self::EXTENSION)))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Keys become file names: ASCII alphanumerics, '-' and '_' only
    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

        if valid {
            Ok(())
        } else {
            Err(CashError::InvalidKey(key.to_string()))
        }
    }

    /// Frame a payload: [magic][version][len][crc][payload]
    fn encode_frame(key: &str, value: &[u8]) -> Result<Vec<u8>> {
        let len = u32::try_from(value.len()).map_err(|_| CashError::PersistenceWriteFailed {
            key: key.to_string(),
            reason: format!("value of {} bytes is too large", value.len()),
        })?;

        let mut frame = Vec::with_capacity(HEADER_SIZE + value.len());
        frame.extend_from_slice(MAGIC);
        frame.extend_from_slice(&VERSION.to_le_bytes());
        frame.extend_from_slice(&len.to_le_bytes());
        frame.extend_from_slice(&crc32fast::hash(value).to_le_bytes());
        frame.extend_from_slice(value);
        Ok(frame)
    }

    /// Validate a frame and return its payload
    fn decode_frame(key: &str, mut frame: Vec<u8>) -> Result<Vec<u8>> {
        let corrupt = |reason: String| CashError::DataCorrupt {
            key: key.to_string(),
            reason,
        };

        if frame.len() < HEADER_SIZE {
            return Err(corrupt(format!("truncated header ({} bytes)", frame.len())));
        }

        if &frame[0..4] != MAGIC {
            return Err(corrupt("bad magic".to_string()));
        }

        let version = u16::from_le_bytes([frame[4], frame[5]]);
        if version != VERSION {
            return Err(corrupt(format!("unsupported version {}", version)));
        }

        let len = u32::from_le_bytes([frame[6], frame[7], frame[8], frame[9]]) as usize;
        let stored_crc = u32::from_le_bytes([frame[10], frame[11], frame[12], frame[13]]);

        let payload_len = frame.len() - HEADER_SIZE;
        if payload_len != len {
            return Err(corrupt(format!(
                "length mismatch: header says {}, found {}",
                len, payload_len
            )));
        }

        let payload = frame.split_off(HEADER_SIZE);
        let actual_crc = crc32fast::hash(&payload);
        if actual_crc != stored_crc {
            return Err(corrupt(format!(
                "checksum mismatch: expected {:08x}, got {:08x}",
                stored_crc, actual_crc
            )));
        }

        Ok(payload)
    }
}

impl PersistenceAdapter for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;

        let frame = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Self::decode_frame(key, frame).map(Some)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = self.dir.join(format!("{}.{}", key, Self::TEMP_EXTENSION));
        let frame = Self::encode_frame(key, value)?;

        let _write_guard = self.write_lock.lock();

        // Step 1: Write the full frame to a temp file
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&frame)?;

            if self.sync_strategy == SyncStrategy::EveryWrite {
                file.sync_all()?;
            }
        }

        // Step 2: Atomically replace the previous value
        fs::rename(&temp_path, &path)?;

        tracing::debug!(key, bytes = value.len(), "wrote value file");
        Ok(())
    }
}
