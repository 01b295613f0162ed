pub mod args;
pub mod commands;
pub mod config;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use config::Config;
use poker_ledger_core::{FileStore, Ledger, LedgerError, LedgerStore};
use std::io::Write;

/// Runs the CLI with provided args, writing to the given writers.
/// Returns the intended process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are successful exits
            let code = e.exit_code();
            let target: &mut dyn Write = if e.use_stderr() { err } else { out };
            let _ = write!(target, "{}", e.render());
            return code;
        }
    };

    match execute(cli, out) {
        Ok(()) => 0,
        Err(e) => {
            // Validation failures are routine; anything else is worth a log line
            if e.downcast_ref::<LedgerError>().is_none() {
                tracing::error!(error = ?e, "command failed");
            }
            let _ = writeln!(err, "error: {:#}", e);
            1
        }
    }
}

/// Resolve config and storage, then apply one command
pub fn execute(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let cfg = Config::load_or_create(&cli.config)
        .with_context(|| format!("loading or creating config '{}'", cli.config.display()))?;
    let data_dir = cli.data_dir.clone().unwrap_or(cfg.data_dir);

    tracing::debug!(data_dir = %data_dir.display(), "opening ledger");
    let store = LedgerStore::with_default_buy_in(
        FileStore::new(data_dir),
        cfg.default_buy_in_in_cents,
    );
    let mut ledger = Ledger::open_store(store);

    commands::execute(&mut ledger, cli.command, cli.json, out)
}

/// Log filter used when `RUST_LOG` is not set
pub fn default_log_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "poker_ledger_cli=info,poker_ledger_core=warn,warn"
    }
}
