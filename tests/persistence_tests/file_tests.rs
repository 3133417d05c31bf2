//! Tests for FileStore
//!
//! These tests verify:
//! - Opening/creating the data directory
//! - Set/get and persistence across reopen
//! - Key validation
//! - Corruption detection (magic, version, length, checksum)
//! - No temp files left behind

use std::fs;
use std::path::PathBuf;

use cashbook::config::SyncStrategy;
use cashbook::{CashError, FileStore, PersistenceAdapter};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, FileStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path(), SyncStrategy::EveryWrite).unwrap();
    (temp_dir, store)
}

fn value_path(store: &FileStore, key: &str) -> PathBuf {
    store.path_for(key).unwrap()
}

fn assert_corrupt(store: &FileStore, key: &str) {
    match store.get(key) {
        Err(CashError::DataCorrupt { key: k, .. }) => assert_eq!(k, key),
        other => panic!("expected DataCorrupt, got {:?}", other),
    }
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("data");

    assert!(!path.exists());

    let store = FileStore::open(&path, SyncStrategy::Never).unwrap();

    assert!(path.is_dir());
    assert_eq!(store.dir(), path.as_path());
}

#[test]
fn test_get_missing_key() {
    let (_temp, store) = setup_temp_store();

    assert_eq!(store.get("PrivateItems").unwrap(), None);
}

// =============================================================================
// Set / Get Tests
// =============================================================================

#[test]
fn test_set_and_get() {
    let (_temp, store) = setup_temp_store();

    store.set("PrivateItems", b"[1,2,3]").unwrap();

    assert_eq!(store.get("PrivateItems").unwrap(), Some(b"[1,2,3]".to_vec()));
    assert!(value_path(&store, "PrivateItems").exists());
}

#[test]
fn test_set_empty_value() {
    let (_temp, store) = setup_temp_store();

    store.set("key", b"").unwrap();

    assert_eq!(store.get("key").unwrap(), Some(Vec::new()));
}

#[test]
fn test_overwrite_leaves_no_temp_file() {
    let (temp, store) = setup_temp_store();

    store.set("BusinessItems", b"old").unwrap();
    store.set("BusinessItems", b"new").unwrap();

    assert_eq!(store.get("BusinessItems").unwrap(), Some(b"new".to_vec()));

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["BusinessItems.cash".to_string()]);
}

#[test]
fn test_values_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileStore::open(temp_dir.path(), SyncStrategy::Never).unwrap();
        store.set("PrivateItems", b"private").unwrap();
        store.set("BusinessItems", b"business").unwrap();
    }

    let store = FileStore::open(temp_dir.path(), SyncStrategy::Never).unwrap();
    assert_eq!(store.get("PrivateItems").unwrap(), Some(b"private".to_vec()));
    assert_eq!(store.get("BusinessItems").unwrap(), Some(b"business".to_vec()));
}

#[test]
fn test_binary_value() {
    let (_temp, store) = setup_temp_store();
    let value: Vec<u8> = (0..=255).collect();

    store.set("bin", &value).unwrap();

    assert_eq!(store.get("bin").unwrap(), Some(value));
}

// =============================================================================
// Key Validation Tests
// =============================================================================

#[test]
fn test_invalid_keys_rejected() {
    let (_temp, store) = setup_temp_store();

    for key in ["", "../escape", "a/b", "with space", "dot.key"] {
        assert!(matches!(store.set(key, b"x"), Err(CashError::InvalidKey(_))));
        assert!(matches!(store.get(key), Err(CashError::InvalidKey(_))));
    }
}

#[test]
fn test_valid_key_characters() {
    let (_temp, store) = setup_temp_store();

    store.set("Private-Items_2", b"ok").unwrap();

    assert_eq!(store.get("Private-Items_2").unwrap(), Some(b"ok".to_vec()));
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_truncated_header() {
    let (_temp, store) = setup_temp_store();
    fs::write(value_path(&store, "key"), b"CAS").unwrap();

    assert_corrupt(&store, "key");
}

#[test]
fn test_bad_magic() {
    let (_temp, store) = setup_temp_store();
    store.set("key", b"payload").unwrap();

    let path = value_path(&store, "key");
    let mut bytes = fs::read(&path).unwrap();
    bytes[0] = b'X';
    fs::write(&path, bytes).unwrap();

    assert_corrupt(&store, "key");
}

#[test]
fn test_unsupported_version() {
    let (_temp, store) = setup_temp_store();
    store.set("key", b"payload").unwrap();

    let path = value_path(&store, "key");
    let mut bytes = fs::read(&path).unwrap();
    bytes[4..6].copy_from_slice(&99u16.to_le_bytes());
    fs::write(&path, bytes).unwrap();

    assert_corrupt(&store, "key");
}

#[test]
fn test_truncated_payload() {
    let (_temp, store) = setup_temp_store();
    store.set("key", b"payload").unwrap();

    let path = value_path(&store, "key");
    let mut bytes = fs::read(&path).unwrap();
    bytes.pop();
    fs::write(&path, bytes).unwrap();

    assert_corrupt(&store, "key");
}

#[test]
fn test_checksum_mismatch() {
    let (_temp, store) = setup_temp_store();
    store.set("key", b"payload").unwrap();

    let path = value_path(&store, "key");
    let mut bytes = fs::read(&path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xff;
    fs::write(&path, bytes).unwrap();

    assert_corrupt(&store, "key");
}

#[test]
fn test_corruption_is_per_key() {
    let (_temp, store) = setup_temp_store();
    store.set("PrivateItems", b"a").unwrap();
    store.set("BusinessItems", b"b").unwrap();

    fs::write(value_path(&store, "PrivateItems"), b"junk junk junk junk").unwrap();

    assert_corrupt(&store, "PrivateItems");
    assert_eq!(store.get("BusinessItems").unwrap(), Some(b"b".to_vec()));
}
