//! Entry point for the poker-ledger CLI.

use clap::Parser;
use poker_ledger_cli::{args::Cli, default_log_filter, run};

fn main() {
    // Peek at --debug before the full run so logging is up for config loading
    let debug = Cli::try_parse().map(|cli| cli.debug).unwrap_or(false);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .with_writer(std::io::stderr)
        .init();

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
