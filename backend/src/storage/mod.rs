//! Storage - Save/Load Ledger State
//!
//! Persists the roster and the buy-in amount under two keys:
//!
//! - `players`: JSON array of players (camelCase fields)
//! - `buyInAmountInCents`: JSON integer
//!
//! Backends only move strings in and out of a key/value space; JSON encoding
//! and defaults live in [`LedgerStore`] so every backend behaves the same.
//!
//! # Critical Invariants
//!
//! - **Format Stability**: Keys and field names match what earlier builds wrote
//! - **Uniform Defaults**: An absent buy-in amount reads as 1000 cents on every backend

pub mod file;
pub mod memory;

use crate::models::player::Player;
use crate::models::session::DEFAULT_BUY_IN_AMOUNT_IN_CENTS;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the roster
pub const PLAYERS_KEY: &str = "players";

/// Key holding the per-buy-in amount
pub const BUY_IN_AMOUNT_KEY: &str = "buyInAmountInCents";

/// Persistence failures (read, write or decode)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value for key {key:?} is not valid: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal string key/value backend
pub trait KeyValueStore {
    /// Read the raw value for `key`; `Ok(None)` when never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the raw value for `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Typed access to the ledger keys on top of any backend
///
/// # Example
/// ```
/// use poker_ledger_core::storage::{LedgerStore, MemoryStore};
/// use poker_ledger_core::Player;
///
/// let mut store = LedgerStore::new(MemoryStore::new());
/// assert_eq!(store.load_buy_in_amount().unwrap(), 1000);
///
/// store.save_players(&[Player::new("Alice".to_string())]).unwrap();
/// assert_eq!(store.load_players().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LedgerStore<S> {
    backend: S,
    default_buy_in_amount_in_cents: i64,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_default_buy_in(backend, DEFAULT_BUY_IN_AMOUNT_IN_CENTS)
    }

    /// Use a different buy-in amount when none has been stored
    pub fn with_default_buy_in(backend: S, default_buy_in_amount_in_cents: i64) -> Self {
        Self {
            backend,
            default_buy_in_amount_in_cents,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn default_buy_in_amount_in_cents(&self) -> i64 {
        self.default_buy_in_amount_in_cents
    }

    /// Load the roster; an absent key is an empty roster
    pub fn load_players(&self) -> Result<Vec<Player>, StorageError> {
        match self.backend.get(PLAYERS_KEY)? {
            Some(json) => decode(PLAYERS_KEY, &json),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_players(&mut self, players: &[Player]) -> Result<(), StorageError> {
        let json = encode(PLAYERS_KEY, &players)?;
        self.backend.set(PLAYERS_KEY, &json)
    }

    /// Load the buy-in amount; an absent key is the configured default
    pub fn load_buy_in_amount(&self) -> Result<i64, StorageError> {
        match self.backend.get(BUY_IN_AMOUNT_KEY)? {
            Some(json) => decode(BUY_IN_AMOUNT_KEY, &json),
            None => Ok(self.default_buy_in_amount_in_cents),
        }
    }

    pub fn save_buy_in_amount(&mut self, cents: i64) -> Result<(), StorageError> {
        let json = encode(BUY_IN_AMOUNT_KEY, &cents)?;
        self.backend.set(BUY_IN_AMOUNT_KEY, &json)
    }
}

fn encode<T: serde::Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialization {
        key: key.to_string(),
        source,
    })
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, json: &str) -> Result<T, StorageError> {
    serde_json::from_str(json).map_err(|source| StorageError::Serialization {
        key: key.to_string(),
        source,
    })
}
