//! Settlement Module
//!
//! Works out who owes the pot and who is owed by it at the end of a game.
//!
//! - **calculator**: per-player diff and pot-wide totals
//! - **summary**: display rows, settled indicator, clipboard text
//!
//! # Example
//!
//! ```rust
//! use poker_ledger_core::{settlement, Player};
//!
//! let players = vec![
//!     Player::with_counts("Alice".to_string(), 2, 1500),
//!     Player::with_counts("Bob".to_string(), 1, 300),
//! ];
//!
//! assert_eq!(settlement::player_diff(&players[0], 1000), -500);
//! assert_eq!(settlement::player_diff(&players[1], 1000), -700);
//! assert_eq!(settlement::total_balance(&players, 1000), -1200);
//! ```

pub mod calculator;
pub mod summary;

// Re-export public API
pub use calculator::{
    check_totals, player_diff, total_balance, total_buy_in_contributions, total_chip_count,
};
pub use summary::{PlayerSummary, SettlementSummary};
