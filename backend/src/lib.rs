//! Poker Ledger Core
//!
//! Money model and settlement arithmetic for a home poker night: players buy
//! in for a fixed amount, report ending chip counts, and the summary shows who
//! owes the pot and who is owed by it.
//!
//! # Architecture
//!
//! - **core**: Money parsing and formatting (dollar strings <-> cents)
//! - **models**: Domain types (Player, Session)
//! - **settlement**: Per-player diffs, pot totals, summary rows
//! - **storage**: Key/value persistence of roster and buy-in amount
//! - **ledger**: Session bound to a store, persisting after each change
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Truncate, never round, when reading fractional cents
//! 3. Balances are derived on demand, never stored

// Module declarations
pub mod core;
pub mod ledger;
pub mod models;
pub mod settlement;
pub mod storage;

// Re-exports for convenience
pub use crate::core::money::{
    format_cents_to_dollars, format_signed_cents, parse_dollars_to_cents,
    parse_non_negative_cents, MoneyError,
};
pub use ledger::{Ledger, LedgerError};
pub use models::{
    player::{Player, SettlementStatus, MAX_NAME_LEN},
    session::{RosterError, Session, DEFAULT_BUY_IN_AMOUNT_IN_CENTS},
};
pub use settlement::{PlayerSummary, SettlementSummary};
pub use storage::{FileStore, KeyValueStore, LedgerStore, MemoryStore, StorageError};
