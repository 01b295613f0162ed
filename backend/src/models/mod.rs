//! Domain models for the poker ledger

pub mod player;
pub mod session;

// Re-exports
pub use player::{Player, SettlementStatus, INITIAL_BUY_INS, MAX_NAME_LEN};
pub use session::{RosterError, Session, DEFAULT_BUY_IN_AMOUNT_IN_CENTS};
