use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "poker-ledger", version, about = "Poker night buy-in and settlement ledger", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(long, default_value = "poker-ledger.toml")]
    pub config: PathBuf,

    /// Directory holding the saved roster (overrides config.data_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage the roster
    Players {
        #[command(subcommand)]
        action: PlayersCommand,
    },
    /// Show or change buy-ins
    BuyIns {
        #[command(subcommand)]
        action: BuyInsCommand,
    },
    /// Record ending chip counts
    Chips {
        #[command(subcommand)]
        action: ChipsCommand,
    },
    /// Show who owes and who is owed
    Summary {
        /// Print only the text for sharing (one `name: +12.50` line per player)
        #[arg(long, default_value_t = false)]
        copy: bool,

        #[command(subcommand)]
        action: Option<SummaryCommand>,
    },
    /// Reset buy-ins, chip counts and checks, keeping the roster
    NewGame,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlayersCommand {
    /// List players in entry order
    List,
    /// Add a player (max 13 characters, unique ignoring case)
    Add { name: String },
    /// Remove a player
    Remove { name: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum BuyInsCommand {
    /// List each player's buy-ins and contribution
    List,
    /// Show the buy-in amount, or set it in dollars (e.g. 20 or 12.50)
    Amount {
        #[arg(allow_hyphen_values = true)]
        dollars: Option<String>,
    },
    /// Give a player one more buy-in
    Add { name: String },
    /// Take one buy-in back (never below 1)
    Remove { name: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ChipsCommand {
    /// List each player's chip count
    List,
    /// Set a player's ending chips in dollars
    Set {
        name: String,
        #[arg(allow_hyphen_values = true)]
        dollars: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SummaryCommand {
    /// Toggle a player's PAID / REQUESTED mark
    Check { name: String },
    /// Clear every mark
    Uncheck,
}
