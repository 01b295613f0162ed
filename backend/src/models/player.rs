//! Player model
//!
//! Represents one person at the table for the current game.
//! Each player has:
//! - Display name (unique per roster, case-insensitive)
//! - Number of buy-ins taken (at least 1)
//! - Ending chip count (i64 cents)
//!
//! Two presentation flags (`isEditing`, `checked`) ride along in the persisted
//! JSON. They never feed into settlement arithmetic.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// Maximum number of characters in a player name
pub const MAX_NAME_LEN: usize = 13;

/// Buy-in count every player starts a game with
pub const INITIAL_BUY_INS: u32 = 1;

/// Settlement label shown next to a checked player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementStatus {
    /// Player was owed money and has been paid out
    Paid,
    /// Player owed money (or broke even) and payment was requested
    Requested,
}

impl SettlementStatus {
    /// Label for a player with the given diff: PAID if owed money, else REQUESTED
    pub fn for_diff(diff: i64) -> Self {
        if diff > 0 {
            SettlementStatus::Paid
        } else {
            SettlementStatus::Requested
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettlementStatus::Paid => "PAID",
            SettlementStatus::Requested => "REQUESTED",
        }
    }
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A player in the session roster
///
/// Field names serialize in camelCase to keep the persisted `players` format.
///
/// # Example
/// ```
/// use poker_ledger_core::Player;
///
/// let mut player = Player::new("Alice".to_string());
/// assert_eq!(player.buy_ins(), 1);
/// assert_eq!(player.chip_count_in_cents(), 0);
///
/// player.increment_buy_ins();
/// assert_eq!(player.buy_ins(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Display name, stored trimmed
    name: String,

    /// Number of buy-ins taken this game (>= 1)
    buy_ins: u32,

    /// Ending chip count in cents (>= 0)
    chip_count_in_cents: i64,

    /// Chip count input is open for editing
    #[serde(default)]
    is_editing: bool,

    /// Settlement acknowledged for this game
    #[serde(default)]
    checked: bool,
}

impl Player {
    /// Create a player fresh to the roster: one buy-in, no chips counted
    pub fn new(name: String) -> Self {
        Self {
            name,
            buy_ins: INITIAL_BUY_INS,
            chip_count_in_cents: 0,
            is_editing: false,
            checked: false,
        }
    }

    /// Create a player with explicit game values (restoring or testing)
    ///
    /// A buy-in count of zero is lifted to 1 and a negative chip count to 0.
    pub fn with_counts(name: String, buy_ins: u32, chip_count_in_cents: i64) -> Self {
        Self {
            name,
            buy_ins: buy_ins.max(INITIAL_BUY_INS),
            chip_count_in_cents: chip_count_in_cents.max(0),
            is_editing: false,
            checked: false,
        }
    }

    /// Lift out-of-range stored counts the way `with_counts` does
    ///
    /// Returns true if anything changed.
    pub(crate) fn normalize(&mut self) -> bool {
        let buy_ins = self.buy_ins.max(INITIAL_BUY_INS);
        let chips = self.chip_count_in_cents.max(0);
        let changed = buy_ins != self.buy_ins || chips != self.chip_count_in_cents;
        self.buy_ins = buy_ins;
        self.chip_count_in_cents = chips;
        changed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buy_ins(&self) -> u32 {
        self.buy_ins
    }

    pub fn chip_count_in_cents(&self) -> i64 {
        self.chip_count_in_cents
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Case-insensitive name comparison used for roster uniqueness
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Add one buy-in
    pub fn increment_buy_ins(&mut self) {
        self.buy_ins = self.buy_ins.saturating_add(1);
    }

    /// Remove one buy-in, never going below 1
    pub fn decrement_buy_ins(&mut self) {
        if self.buy_ins > INITIAL_BUY_INS {
            self.buy_ins -= 1;
        }
    }

    /// Record the ending chip count
    ///
    /// Callers validate the sign; see `Session::set_chip_count`.
    pub(crate) fn set_chip_count_in_cents(&mut self, cents: i64) {
        self.chip_count_in_cents = cents;
        self.is_editing = false;
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.is_editing = editing;
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the settlement-acknowledged flag, returning the new value
    pub fn toggle_checked(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    /// Return the player to the start-of-game state, keeping the name
    pub fn reset_for_new_game(&mut self) {
        self.buy_ins = INITIAL_BUY_INS;
        self.chip_count_in_cents = 0;
        self.is_editing = false;
        self.checked = false;
    }

    /// Total paid into the pot: buy-ins times the per-buy-in amount
    pub fn contribution_in_cents(&self, buy_in_amount_in_cents: i64) -> i64 {
        i64::from(self.buy_ins) * buy_in_amount_in_cents
    }
}
