//! Settlement Calculator
//!
//! Net position of each player against the pot, and the pot-wide imbalance.
//!
//! ```text
//! diff(player)  = chip_count_in_cents - buy_ins × buy_in_amount_in_cents
//! total_balance = Σ diff(player)
//!               = total_chip_count - total_buy_in_contributions
//! ```
//!
//! # Critical Invariants
//!
//! - **Sign**: Positive diff means the player is owed money, negative means
//!   they owe the pot
//! - **Reconciliation**: A consistent game has total balance exactly zero; a
//!   non-zero total is a data-entry error, surfaced and never corrected
//! - **Range**: The plain functions assume every figure fits in i64. `Session`
//!   runs `check_totals` before committing any change that can grow them

use crate::core::money::MoneyError;
use crate::models::player::Player;

/// Net balance of one player in cents
///
/// # Example
/// ```
/// use poker_ledger_core::{settlement, Player};
///
/// let player = Player::with_counts("Alice".to_string(), 2, 1500);
/// assert_eq!(settlement::player_diff(&player, 1000), -500);
/// ```
pub fn player_diff(player: &Player, buy_in_amount_in_cents: i64) -> i64 {
    player.chip_count_in_cents() - player.contribution_in_cents(buy_in_amount_in_cents)
}

/// Sum of every player's diff
pub fn total_balance(players: &[Player], buy_in_amount_in_cents: i64) -> i64 {
    players
        .iter()
        .map(|player| player_diff(player, buy_in_amount_in_cents))
        .sum()
}

/// Sum of what every player paid in
pub fn total_buy_in_contributions(players: &[Player], buy_in_amount_in_cents: i64) -> i64 {
    players
        .iter()
        .map(|player| player.contribution_in_cents(buy_in_amount_in_cents))
        .sum()
}

/// Sum of every player's ending chips
pub fn total_chip_count(players: &[Player]) -> i64 {
    players.iter().map(|player| player.chip_count_in_cents()).sum()
}

/// Verify that every per-player and pot-wide figure fits in i64 cents
///
/// Accumulates in i128, so the check itself cannot overflow.
///
/// # Example
/// ```
/// use poker_ledger_core::{settlement, MoneyError, Player};
///
/// let players = vec![Player::with_counts("Alice".to_string(), 2, 0)];
/// assert!(settlement::check_totals(&players, 1000).is_ok());
/// assert_eq!(
///     settlement::check_totals(&players, i64::MAX),
///     Err(MoneyError::Overflow)
/// );
/// ```
pub fn check_totals(players: &[Player], buy_in_amount_in_cents: i64) -> Result<(), MoneyError> {
    let amount = i128::from(buy_in_amount_in_cents);
    let mut contributions: i128 = 0;
    let mut chips: i128 = 0;
    let mut balance: i128 = 0;

    for player in players {
        let contribution = i128::from(player.buy_ins()) * amount;
        let player_chips = i128::from(player.chip_count_in_cents());
        let diff = player_chips - contribution;
        fits(contribution)?;
        fits(diff)?;

        contributions += contribution;
        chips += player_chips;
        balance += diff;
    }

    fits(contributions)?;
    fits(chips)?;
    fits(balance)
}

fn fits(value: i128) -> Result<(), MoneyError> {
    i64::try_from(value)
        .map(|_| ())
        .map_err(|_| MoneyError::Overflow)
}
