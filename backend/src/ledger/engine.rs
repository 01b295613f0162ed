//! Ledger engine
//!
//! Owns the session and its store. Every mutation runs against the in-memory
//! session first; only when it succeeds is the changed key written back.
//!
//! # Persistence Policy
//!
//! - Loading never fails: unreadable or corrupt state is logged and replaced
//!   by an empty roster / the default buy-in amount. Stored values that break
//!   the session invariants count as corrupt
//! - Saving never fails either: a write error is logged, not retried, and the
//!   in-memory session stays authoritative
//! - Validation errors are returned to the caller and nothing is written
//!
//! # Example
//!
//! ```rust
//! use poker_ledger_core::storage::MemoryStore;
//! use poker_ledger_core::Ledger;
//!
//! let mut ledger = Ledger::open(MemoryStore::new());
//! ledger.add_player("Alice").unwrap();
//! ledger.add_player("Bob").unwrap();
//! ledger.set_chip_count_from_input("alice", "15").unwrap();
//! ledger.set_chip_count_from_input("bob", "5").unwrap();
//!
//! let summary = ledger.summary();
//! assert_eq!(summary.players[0].diff_in_cents, 500);
//! assert!(summary.is_settled());
//! ```

use crate::core::money::{parse_non_negative_cents, MoneyError};
use crate::models::player::Player;
use crate::models::session::{RosterError, Session};
use crate::settlement::SettlementSummary;
use crate::storage::{KeyValueStore, LedgerStore, StorageError};
use thiserror::Error;

/// Any failure a ledger caller can see
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StorageError),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),
}

/// Session plus its persistent store
#[derive(Debug)]
pub struct Ledger<S> {
    session: Session,
    store: LedgerStore<S>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Open a ledger over a backend with the standard default buy-in
    pub fn open(backend: S) -> Self {
        Self::open_store(LedgerStore::new(backend))
    }

    /// Load state from `store`, degrading to defaults on any read failure
    pub fn open_store(store: LedgerStore<S>) -> Self {
        let players = store.load_players().unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to load players, starting with an empty roster");
            Vec::new()
        });
        let fallback = store.default_buy_in_amount_in_cents();
        let buy_in_amount = match store.load_buy_in_amount() {
            Ok(cents) if cents >= 0 => cents,
            Ok(cents) => {
                tracing::error!(cents, fallback, "stored buy-in amount is negative, using default");
                fallback
            }
            Err(e) => {
                tracing::error!(error = %e, fallback, "failed to load buy-in amount, using default");
                fallback
            }
        };

        let session = Session::from_parts(players, buy_in_amount).unwrap_or_else(|e| {
            tracing::error!(error = %e, "stored roster is invalid, starting with an empty roster");
            Session::new(buy_in_amount)
        });

        tracing::debug!(
            players = session.num_players(),
            buy_in_amount_in_cents = buy_in_amount,
            "ledger opened"
        );

        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn players(&self) -> &[Player] {
        self.session.players()
    }

    pub fn buy_in_amount_in_cents(&self) -> i64 {
        self.session.buy_in_amount_in_cents()
    }

    pub fn store(&self) -> &LedgerStore<S> {
        &self.store
    }

    /// Position of a player by name, case-insensitive
    pub fn index_of(&self, name: &str) -> Result<usize, LedgerError> {
        self.session
            .position(name)
            .ok_or_else(|| LedgerError::PlayerNotFound(name.trim().to_string()))
    }

    // ========================================================================
    // Roster
    // ========================================================================

    pub fn add_player(&mut self, name: &str) -> Result<(), LedgerError> {
        self.session.add_player(name)?;
        self.persist_players();
        Ok(())
    }

    pub fn remove_player(&mut self, name: &str) -> Result<Player, LedgerError> {
        let index = self.index_of(name)?;
        let removed = self.session.remove_player(index)?;
        self.persist_players();
        Ok(removed)
    }

    // ========================================================================
    // Buy-ins
    // ========================================================================

    pub fn increment_buy_ins(&mut self, name: &str) -> Result<u32, LedgerError> {
        let index = self.index_of(name)?;
        let buy_ins = self.session.increment_buy_ins(index)?;
        self.persist_players();
        Ok(buy_ins)
    }

    pub fn decrement_buy_ins(&mut self, name: &str) -> Result<u32, LedgerError> {
        let index = self.index_of(name)?;
        let buy_ins = self.session.decrement_buy_ins(index)?;
        self.persist_players();
        Ok(buy_ins)
    }

    /// Commit a buy-in amount typed as dollars
    pub fn set_buy_in_amount_from_input(&mut self, input: &str) -> Result<i64, LedgerError> {
        let cents = parse_non_negative_cents(input)?;
        self.set_buy_in_amount(cents)?;
        Ok(cents)
    }

    pub fn set_buy_in_amount(&mut self, cents: i64) -> Result<(), LedgerError> {
        self.session.set_buy_in_amount(cents)?;
        if let Err(e) = self.store.save_buy_in_amount(cents) {
            tracing::error!(error = %e, "failed to save buy-in amount");
        }
        Ok(())
    }

    // ========================================================================
    // Chip counts
    // ========================================================================

    /// Commit a chip count typed as dollars
    pub fn set_chip_count_from_input(&mut self, name: &str, input: &str) -> Result<i64, LedgerError> {
        let cents = parse_non_negative_cents(input)?;
        self.set_chip_count(name, cents)?;
        Ok(cents)
    }

    pub fn set_chip_count(&mut self, name: &str, cents: i64) -> Result<(), LedgerError> {
        let index = self.index_of(name)?;
        self.session.set_chip_count(index, cents)?;
        self.persist_players();
        Ok(())
    }

    /// Commit several chip counts at once; nothing changes if any input is bad
    pub fn set_all_chip_counts<'a, I>(&mut self, entries: I) -> Result<(), LedgerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut parsed = Vec::new();
        for (name, input) in entries {
            parsed.push((self.index_of(name)?, parse_non_negative_cents(input)?));
        }

        let mut next = self.session.clone();
        for (index, cents) in parsed {
            next.set_chip_count(index, cents)?;
        }
        self.session = next;
        self.persist_players();
        Ok(())
    }

    // ========================================================================
    // Summary
    // ========================================================================

    /// Toggle a player's settlement acknowledgement
    pub fn toggle_checked(&mut self, name: &str) -> Result<bool, LedgerError> {
        let index = self.index_of(name)?;
        let checked = self.session.toggle_checked(index)?;
        self.persist_players();
        Ok(checked)
    }

    /// Uncheck everyone, ready to settle up again
    pub fn clear_checked(&mut self) {
        self.session.clear_checked();
        self.persist_players();
    }

    /// Reset every player for a new game and persist the roster
    pub fn start_new_game(&mut self) {
        self.session.reset_for_new_game();
        self.persist_players();
    }

    /// Settlement figures for the current state
    pub fn summary(&self) -> SettlementSummary {
        self.session.summary()
    }

    fn persist_players(&mut self) {
        if let Err(e) = self.store.save_players(self.session.players()) {
            tracing::error!(error = %e, "failed to save players");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Backend whose writes always fail
    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn test_write_failures_do_not_surface() {
        let mut ledger = Ledger::open(ReadOnlyStore);

        ledger.add_player("Alice").unwrap();
        ledger.set_buy_in_amount(2000).unwrap();

        assert_eq!(ledger.players().len(), 1);
        assert_eq!(ledger.buy_in_amount_in_cents(), 2000);
    }

    #[test]
    fn test_bulk_chip_counts_all_or_nothing() {
        let mut ledger = Ledger::open(MemoryStore::new());
        ledger.add_player("Alice").unwrap();
        ledger.add_player("Bob").unwrap();

        let result = ledger.set_all_chip_counts([("Alice", "12"), ("Bob", "abc")]);
        assert!(matches!(result, Err(LedgerError::Money(_))));
        assert_eq!(ledger.players()[0].chip_count_in_cents(), 0);

        ledger
            .set_all_chip_counts([("Alice", "12"), ("Bob", "8.5")])
            .unwrap();
        assert_eq!(ledger.players()[0].chip_count_in_cents(), 1200);
        assert_eq!(ledger.players()[1].chip_count_in_cents(), 850);
    }

    #[test]
    fn test_unknown_player_name() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let result = ledger.increment_buy_ins("ghost");
        assert!(matches!(result, Err(LedgerError::PlayerNotFound(name)) if name == "ghost"));
    }
}
