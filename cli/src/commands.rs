//! Screen commands
//!
//! Each subcommand mirrors one screen: apply the change through the ledger,
//! then print the state that screen would show.

use crate::args::{BuyInsCommand, ChipsCommand, Commands, PlayersCommand, SummaryCommand};
use anyhow::Result;
use poker_ledger_core::{
    format_cents_to_dollars, KeyValueStore, Ledger, MAX_NAME_LEN, SettlementSummary,
};
use std::io::Write;

/// Apply `command` to `ledger` and print the result
pub fn execute<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    command: Commands,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Players { action } => players(ledger, action, out),
        Commands::BuyIns { action } => buy_ins(ledger, action, out),
        Commands::Chips { action } => chips(ledger, action, out),
        Commands::Summary { copy, action } => summary(ledger, copy, action, json, out),
        Commands::NewGame => {
            ledger.start_new_game();
            writeln!(
                out,
                "New game started. Kept {} player(s).",
                ledger.players().len()
            )?;
            Ok(())
        }
    }
}

fn players<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    action: PlayersCommand,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        PlayersCommand::List => {}
        PlayersCommand::Add { name } => ledger.add_player(&name)?,
        PlayersCommand::Remove { name } => {
            let removed = ledger.remove_player(&name)?;
            writeln!(out, "Removed {}", removed.name())?;
        }
    }

    if ledger.players().is_empty() {
        writeln!(out, "No players yet.")?;
    }
    for player in ledger.players() {
        writeln!(out, "{}", player.name())?;
    }
    Ok(())
}

fn buy_ins<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    action: BuyInsCommand,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        BuyInsCommand::List => {}
        BuyInsCommand::Amount { dollars: None } => {}
        BuyInsCommand::Amount {
            dollars: Some(dollars),
        } => {
            ledger.set_buy_in_amount_from_input(&dollars)?;
        }
        BuyInsCommand::Add { name } => {
            ledger.increment_buy_ins(&name)?;
        }
        BuyInsCommand::Remove { name } => {
            ledger.decrement_buy_ins(&name)?;
        }
    }

    let amount = ledger.buy_in_amount_in_cents();
    writeln!(out, "Buy-In Amount: ${}", format_cents_to_dollars(amount))?;
    for player in ledger.players() {
        writeln!(
            out,
            "{:<width$}  x{:<3} ${}",
            player.name(),
            player.buy_ins(),
            format_cents_to_dollars(player.contribution_in_cents(amount)),
            width = MAX_NAME_LEN,
        )?;
    }
    Ok(())
}

fn chips<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    action: ChipsCommand,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ChipsCommand::List => {}
        ChipsCommand::Set { name, dollars } => {
            ledger.set_chip_count_from_input(&name, &dollars)?;
        }
    }

    for player in ledger.players() {
        writeln!(
            out,
            "{:<width$}  ${}",
            player.name(),
            format_cents_to_dollars(player.chip_count_in_cents()),
            width = MAX_NAME_LEN,
        )?;
    }
    Ok(())
}

fn summary<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    copy: bool,
    action: Option<SummaryCommand>,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        None => {}
        Some(SummaryCommand::Check { name }) => {
            ledger.toggle_checked(&name)?;
        }
        Some(SummaryCommand::Uncheck) => ledger.clear_checked(),
    }

    let summary = ledger.summary();
    if copy {
        write!(out, "{}", summary.to_clipboard_text())?;
    } else if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        render_summary(&summary, out)?;
    }
    Ok(())
}

/// Human-readable summary: one row per player, then the pot balance
pub fn render_summary(summary: &SettlementSummary, out: &mut dyn Write) -> Result<()> {
    for row in &summary.players {
        writeln!(
            out,
            "{:<width$}  {:<9}  {:>10}",
            row.name,
            row.status_label(),
            row.display_diff(),
            width = MAX_NAME_LEN,
        )?;
    }

    let marker = if summary.is_settled() { "  (settled)" } else { "" };
    writeln!(
        out,
        "{:<width$}  {:<9}  {:>10}{}",
        "Balance",
        "",
        summary.display_balance(),
        marker,
        width = MAX_NAME_LEN,
    )?;
    Ok(())
}
