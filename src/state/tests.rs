//! Tests for the state store

use super::*;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    assert_eq!(store.load(), None);
}

#[test]
fn test_load_corrupt_file_is_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "not json {").unwrap();

    let store = StateStore::new(&path);
    assert_eq!(store.load(), None);
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));

    store.save(1_700_000_123_456).unwrap();
    assert_eq!(store.load(), Some(1_700_000_123_456));

    // overwrites, never appends
    store.save(1_600_000_000_000).unwrap();
    assert_eq!(store.load(), Some(1_600_000_000_000));
}

#[test]
fn test_save_uses_wire_field_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    StateStore::new(&path).save(42).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["lastFetchedDate"], 42);
}

#[test]
fn test_save_into_missing_directory_errors() {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("no-such-dir").join("state.json"));

    // the caller logs and carries on; the store just reports it
    assert!(store.save(1).is_err());
}
