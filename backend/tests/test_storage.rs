//! Storage Tests - Save/Load Ledger State
//!
//! Critical invariants tested:
//! - Format stability: keys and camelCase fields as previously written
//! - Uniform defaults: absent buy-in reads as 1000 on every backend
//! - Corrupt values surface as StorageError, never panic

use poker_ledger_core::storage::{
    FileStore, KeyValueStore, LedgerStore, MemoryStore, StorageError, BUY_IN_AMOUNT_KEY,
    PLAYERS_KEY,
};
use poker_ledger_core::Player;
use std::path::PathBuf;

// ============================================================================
// Test Helpers
// ============================================================================

/// Fresh, empty directory unique to one test
fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "poker-ledger-{}-{}",
        test_name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn sample_players() -> Vec<Player> {
    let mut bob = Player::with_counts("Bob".to_string(), 2, 2750);
    bob.set_checked(true);
    vec![Player::new("Alice".to_string()), bob]
}

// ============================================================================
// File backend
// ============================================================================

#[test]
fn test_file_store_missing_dir_reads_defaults() {
    let store = LedgerStore::new(FileStore::new(scratch_dir("missing")));

    assert!(store.load_players().unwrap().is_empty());
    assert_eq!(store.load_buy_in_amount().unwrap(), 1000);
}

#[test]
fn test_file_store_round_trip() {
    let dir = scratch_dir("round-trip");
    let mut store = LedgerStore::new(FileStore::new(&dir));

    store.save_players(&sample_players()).unwrap();
    store.save_buy_in_amount(2000).unwrap();

    let reopened = LedgerStore::new(FileStore::new(&dir));
    assert_eq!(reopened.load_players().unwrap(), sample_players());
    assert_eq!(reopened.load_buy_in_amount().unwrap(), 2000);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_store_one_file_per_key() {
    let dir = scratch_dir("layout");
    let mut store = LedgerStore::new(FileStore::new(&dir));
    store.save_players(&sample_players()).unwrap();
    store.save_buy_in_amount(1500).unwrap();

    assert!(dir.join("players.json").exists());
    assert!(dir.join("buyInAmountInCents.json").exists());

    let raw = std::fs::read_to_string(dir.join("buyInAmountInCents.json")).unwrap();
    assert_eq!(raw.trim(), "1500");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_store_corrupt_players() {
    let dir = scratch_dir("corrupt");
    let mut backend = FileStore::new(&dir);
    backend.set(PLAYERS_KEY, "{not json").unwrap();

    let store = LedgerStore::new(backend);
    assert!(matches!(
        store.load_players(),
        Err(StorageError::Serialization { ref key, .. }) if key == "players"
    ));

    let _ = std::fs::remove_dir_all(&dir);
}

// ============================================================================
// Persisted format
// ============================================================================

#[test]
fn test_players_json_uses_camel_case_fields() {
    let mut store = LedgerStore::new(MemoryStore::new());
    store.save_players(&sample_players()).unwrap();

    let raw = store.backend().get(PLAYERS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value[1]["name"], "Bob");
    assert_eq!(value[1]["buyIns"], 2);
    assert_eq!(value[1]["chipCountInCents"], 2750);
    assert_eq!(value[1]["checked"], true);
}

#[test]
fn test_loads_players_written_without_flags() {
    let mut backend = MemoryStore::new();
    backend
        .set(
            PLAYERS_KEY,
            r#"[{"name":"Alice","buyIns":1,"chipCountInCents":0},
                {"name":"Bob","buyIns":3,"chipCountInCents":4200,"isEditing":true}]"#,
        )
        .unwrap();
    backend.set(BUY_IN_AMOUNT_KEY, "1000").unwrap();

    let store = LedgerStore::new(backend);
    let players = store.load_players().unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[1].buy_ins(), 3);
    assert!(players[1].is_editing());
    assert!(!players[1].is_checked());
}
