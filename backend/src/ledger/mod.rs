//! Ledger - session state bound to persistent storage
//!
//! See `engine.rs` for full implementation.

pub mod engine;

pub use engine::{Ledger, LedgerError};
