//! Session State
//!
//! Holds the roster and the per-buy-in amount for one game night, and exposes
//! every mutation the screens perform on them.
//!
//! # Critical Invariants
//!
//! 1. **Unique Names**: No two players share a name, compared case-insensitively
//! 2. **Buy-In Floor**: Every player has at least one buy-in
//! 3. **Non-Negative Money**: Chip counts and the buy-in amount are >= 0
//! 4. **Failed Validation Is Inert**: A rejected operation leaves state untouched
//! 5. **Representable Totals**: Every contribution, diff and pot total fits in
//!    i64 cents; a change that would break this fails with `MoneyError::Overflow`

use crate::core::money::MoneyError;
use crate::models::player::{Player, MAX_NAME_LEN};
use crate::settlement::{self, SettlementSummary};
use thiserror::Error;

/// Buy-in amount used when nothing has been stored yet ($10.00)
pub const DEFAULT_BUY_IN_AMOUNT_IN_CENTS: i64 = 1000;

/// Errors raised by roster operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Enter a name.")]
    EmptyName,

    #[error("Player already exists: {0}")]
    DuplicateName(String),

    #[error("Player name is too long: {name:?} exceeds {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("No player at position {index} (roster has {len})")]
    NoSuchPlayer { index: usize, len: usize },

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Complete session state
///
/// # Example
///
/// ```rust
/// use poker_ledger_core::Session;
///
/// let mut session = Session::new(1000);
/// session.add_player("Alice").unwrap();
/// session.add_player("Bob").unwrap();
///
/// session.increment_buy_ins(0).unwrap();
/// session.set_chip_count(0, 1500).unwrap();
/// session.set_chip_count(1, 300).unwrap();
///
/// assert_eq!(session.total_balance(), -1200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Roster in entry order; positions are what the screens address
    players: Vec<Player>,

    /// Amount one buy-in costs, shared by every player
    buy_in_amount_in_cents: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_BUY_IN_AMOUNT_IN_CENTS)
    }
}

impl Session {
    /// Create an empty session with the given buy-in amount
    pub fn new(buy_in_amount_in_cents: i64) -> Self {
        Self {
            players: Vec::new(),
            buy_in_amount_in_cents,
        }
    }

    /// Rebuild a session from stored parts
    ///
    /// Buy-in counts below 1 are lifted to 1 and negative chip counts to 0.
    /// A negative buy-in amount, a blank or repeated name, or totals outside
    /// i64 reject the whole record.
    pub fn from_parts(
        mut players: Vec<Player>,
        buy_in_amount_in_cents: i64,
    ) -> Result<Self, RosterError> {
        if buy_in_amount_in_cents < 0 {
            return Err(MoneyError::Negative(buy_in_amount_in_cents).into());
        }

        for player in &mut players {
            if player.normalize() {
                tracing::warn!(player = player.name(), "stored counts out of range, clamped");
            }
        }

        for (i, player) in players.iter().enumerate() {
            if player.name().trim().is_empty() {
                return Err(RosterError::EmptyName);
            }
            if players[..i].iter().any(|p| p.has_name(player.name())) {
                return Err(RosterError::DuplicateName(player.name().to_string()));
            }
        }

        settlement::check_totals(&players, buy_in_amount_in_cents)?;

        Ok(Self {
            players,
            buy_in_amount_in_cents,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn buy_in_amount_in_cents(&self) -> i64 {
        self.buy_in_amount_in_cents
    }

    /// Position of the player with this name (case-insensitive)
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.players.iter().position(|p| p.has_name(name))
    }

    // ========================================================================
    // Roster
    // ========================================================================

    /// Add a new player with one buy-in and no chips
    ///
    /// The name is trimmed first. Checks run in order: empty, duplicate
    /// (case-insensitive), too long.
    pub fn add_player(&mut self, name: &str) -> Result<&Player, RosterError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.position(name).is_some() {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(RosterError::NameTooLong {
                name: name.to_string(),
                max: MAX_NAME_LEN,
            });
        }

        self.players.push(Player::new(name.to_string()));
        if let Err(e) = settlement::check_totals(&self.players, self.buy_in_amount_in_cents) {
            self.players.pop();
            return Err(e.into());
        }
        tracing::debug!(player = name, roster_size = self.players.len(), "player added");
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove the player at `index`, returning it
    pub fn remove_player(&mut self, index: usize) -> Result<Player, RosterError> {
        self.check_index(index)?;
        let removed = self.players.remove(index);
        tracing::debug!(player = removed.name(), "player removed");
        Ok(removed)
    }

    // ========================================================================
    // Buy-ins
    // ========================================================================

    pub fn increment_buy_ins(&mut self, index: usize) -> Result<u32, RosterError> {
        self.update_player(index, |player| {
            player.increment_buy_ins();
            player.buy_ins()
        })
    }

    /// Remove one buy-in; a player already at 1 stays at 1
    pub fn decrement_buy_ins(&mut self, index: usize) -> Result<u32, RosterError> {
        let player = self.player_mut(index)?;
        player.decrement_buy_ins();
        Ok(player.buy_ins())
    }

    /// Set the amount one buy-in costs
    pub fn set_buy_in_amount(&mut self, cents: i64) -> Result<(), RosterError> {
        if cents < 0 {
            return Err(MoneyError::Negative(cents).into());
        }
        settlement::check_totals(&self.players, cents)?;
        self.buy_in_amount_in_cents = cents;
        Ok(())
    }

    // ========================================================================
    // Chip counts
    // ========================================================================

    /// Record a player's ending chip count
    pub fn set_chip_count(&mut self, index: usize, cents: i64) -> Result<(), RosterError> {
        if cents < 0 {
            return Err(MoneyError::Negative(cents).into());
        }
        self.update_player(index, |player| player.set_chip_count_in_cents(cents))
    }

    /// Open or close the chip count input for a player
    pub fn set_editing(&mut self, index: usize, editing: bool) -> Result<(), RosterError> {
        self.player_mut(index)?.set_editing(editing);
        Ok(())
    }

    // ========================================================================
    // Settlement acknowledgement
    // ========================================================================

    /// Flip the settlement-checked flag, returning the new value
    pub fn toggle_checked(&mut self, index: usize) -> Result<bool, RosterError> {
        Ok(self.player_mut(index)?.toggle_checked())
    }

    /// Uncheck everyone
    pub fn clear_checked(&mut self) {
        for player in &mut self.players {
            player.set_checked(false);
        }
    }

    /// Start a new game: same roster, every player back to one buy-in and no chips
    pub fn reset_for_new_game(&mut self) {
        for player in &mut self.players {
            player.reset_for_new_game();
        }
        tracing::info!(roster_size = self.players.len(), "new game started");
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Net balance of the player at `index`
    pub fn player_diff(&self, index: usize) -> Result<i64, RosterError> {
        self.check_index(index)?;
        Ok(settlement::player_diff(
            &self.players[index],
            self.buy_in_amount_in_cents,
        ))
    }

    /// Pot-wide imbalance; zero when chip counts reconcile with buy-ins
    pub fn total_balance(&self) -> i64 {
        settlement::total_balance(&self.players, self.buy_in_amount_in_cents)
    }

    /// Per-player rows and pot totals for the current state
    pub fn summary(&self) -> SettlementSummary {
        SettlementSummary::compute(&self.players, self.buy_in_amount_in_cents)
    }

    fn check_index(&self, index: usize) -> Result<(), RosterError> {
        if index >= self.players.len() {
            return Err(RosterError::NoSuchPlayer {
                index,
                len: self.players.len(),
            });
        }
        Ok(())
    }

    /// Apply `change` to a copy of one player and keep it only if the totals
    /// still fit
    fn update_player<T>(
        &mut self,
        index: usize,
        change: impl FnOnce(&mut Player) -> T,
    ) -> Result<T, RosterError> {
        self.check_index(index)?;
        let mut updated = self.players[index].clone();
        let result = change(&mut updated);

        let previous = std::mem::replace(&mut self.players[index], updated);
        if let Err(e) = settlement::check_totals(&self.players, self.buy_in_amount_in_cents) {
            self.players[index] = previous;
            return Err(e.into());
        }
        Ok(result)
    }

    fn player_mut(&mut self, index: usize) -> Result<&mut Player, RosterError> {
        let len = self.players.len();
        self.players
            .get_mut(index)
            .ok_or(RosterError::NoSuchPlayer { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::default();
        for name in names {
            session.add_player(name).unwrap();
        }
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert_eq!(session.num_players(), 0);
        assert_eq!(session.buy_in_amount_in_cents(), 1000);
        assert_eq!(session.total_balance(), 0);
    }

    #[test]
    fn test_name_stored_trimmed() {
        let session = session_with(&["  Dana  "]);
        assert_eq!(session.players()[0].name(), "Dana");
    }

    #[test]
    fn test_blank_name_is_empty() {
        let mut session = Session::default();
        assert_eq!(session.add_player("   "), Err(RosterError::EmptyName));
    }

    #[test]
    fn test_duplicate_checked_before_length() {
        let long = Player::new("Bartholomew_the_Bold".to_string());
        let mut session = Session::from_parts(vec![long], 1000).unwrap();
        assert_eq!(
            session.add_player("BARTHOLOMEW_THE_BOLD"),
            Err(RosterError::DuplicateName("BARTHOLOMEW_THE_BOLD".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_index() {
        let mut session = session_with(&["Alice"]);
        assert_eq!(
            session.increment_buy_ins(3),
            Err(RosterError::NoSuchPlayer { index: 3, len: 1 })
        );
        assert!(session.remove_player(1).is_err());
        assert_eq!(session.num_players(), 1);
    }

    #[test]
    fn test_negative_buy_in_rejected() {
        let mut session = Session::default();
        let result = session.set_buy_in_amount(-5);
        assert_eq!(result, Err(RosterError::Money(MoneyError::Negative(-5))));
        assert_eq!(session.buy_in_amount_in_cents(), 1000);
    }

    #[test]
    fn test_setting_chips_closes_editing() {
        let mut session = session_with(&["Alice"]);
        session.set_editing(0, true).unwrap();
        session.set_chip_count(0, 450).unwrap();

        assert!(!session.players()[0].is_editing());
        assert_eq!(session.players()[0].chip_count_in_cents(), 450);
    }

    #[test]
    fn test_overflowing_buy_in_rejected() {
        let mut session = session_with(&["Alice", "Bob"]);
        let result = session.set_buy_in_amount(i64::MAX);
        assert_eq!(result, Err(RosterError::Money(MoneyError::Overflow)));
        assert_eq!(session.buy_in_amount_in_cents(), 1000);
    }

    #[test]
    fn test_from_parts_rejects_repeated_names() {
        let players = vec![
            Player::new("Alice".to_string()),
            Player::new("ALICE".to_string()),
        ];
        assert_eq!(
            Session::from_parts(players, 1000),
            Err(RosterError::DuplicateName("ALICE".to_string()))
        );
    }
}
