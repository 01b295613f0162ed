//! Settlement summary
//!
//! Everything the summary view shows, computed in one pass from the roster.

use crate::core::money::{format_cents_to_dollars, format_signed_cents};
use crate::models::player::{Player, SettlementStatus};
use crate::settlement::calculator::{
    player_diff, total_buy_in_contributions, total_chip_count,
};
use serde::Serialize;

/// One player's line in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub buy_ins: u32,

    /// Buy-ins × buy-in amount (cents)
    pub contribution_in_cents: i64,

    pub chip_count_in_cents: i64,

    /// Chips minus contribution (cents); positive = owed money
    pub diff_in_cents: i64,

    pub checked: bool,

    /// PAID / REQUESTED, only once the player is checked
    pub status: Option<SettlementStatus>,
}

impl PlayerSummary {
    fn from_player(player: &Player, buy_in_amount_in_cents: i64) -> Self {
        let diff = player_diff(player, buy_in_amount_in_cents);
        Self {
            name: player.name().to_string(),
            buy_ins: player.buy_ins(),
            contribution_in_cents: player.contribution_in_cents(buy_in_amount_in_cents),
            chip_count_in_cents: player.chip_count_in_cents(),
            diff_in_cents: diff,
            checked: player.is_checked(),
            status: player
                .is_checked()
                .then(|| SettlementStatus::for_diff(diff)),
        }
    }

    /// Diff with its display sign ("+5.00", "+0.00", "-7.00")
    pub fn display_diff(&self) -> String {
        format_signed_cents(self.diff_in_cents)
    }

    /// PAID / REQUESTED once checked, PENDING until then
    pub fn status_label(&self) -> &'static str {
        self.status.map_or("PENDING", |status| status.label())
    }
}

/// Rows plus pot totals for one session
///
/// # Example
/// ```
/// use poker_ledger_core::{Player, SettlementSummary};
///
/// let players = vec![
///     Player::with_counts("Alice".to_string(), 2, 1500),
///     Player::with_counts("Bob".to_string(), 1, 300),
/// ];
///
/// let summary = SettlementSummary::compute(&players, 1000);
/// assert_eq!(summary.total_balance_in_cents, -1200);
/// assert!(!summary.is_settled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementSummary {
    pub buy_in_amount_in_cents: i64,
    pub players: Vec<PlayerSummary>,

    /// Pot size: every buy-in paid (cents)
    pub total_buy_in_contributions: i64,

    pub total_chip_count: i64,

    /// Sum of diffs; zero when the game reconciles
    pub total_balance_in_cents: i64,
}

impl SettlementSummary {
    pub fn compute(players: &[Player], buy_in_amount_in_cents: i64) -> Self {
        let rows: Vec<PlayerSummary> = players
            .iter()
            .map(|p| PlayerSummary::from_player(p, buy_in_amount_in_cents))
            .collect();
        let total_balance_in_cents = rows.iter().map(|r| r.diff_in_cents).sum();

        Self {
            buy_in_amount_in_cents,
            players: rows,
            total_buy_in_contributions: total_buy_in_contributions(
                players,
                buy_in_amount_in_cents,
            ),
            total_chip_count: total_chip_count(players),
            total_balance_in_cents,
        }
    }

    /// True only when the pot balances exactly
    pub fn is_settled(&self) -> bool {
        self.total_balance_in_cents == 0
    }

    /// Pot balance for display; zero carries no sign
    pub fn display_balance(&self) -> String {
        if self.total_balance_in_cents > 0 {
            format_signed_cents(self.total_balance_in_cents)
        } else {
            format_cents_to_dollars(self.total_balance_in_cents)
        }
    }

    /// Text copied to the clipboard: one `name: +12.50` line per player
    pub fn to_clipboard_text(&self) -> String {
        self.players
            .iter()
            .map(|row| format!("{}: {}\n", row.name, row.display_diff()))
            .collect()
    }
}
