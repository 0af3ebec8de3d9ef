//! Minibank CLI - interactive teller console
//!
//! Usage:
//! ```bash
//! minibank
//! minibank --json
//! minibank --config minibank.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use minibank_cli::Console;
use minibank_teller::{Teller, TellerConfig};
use std::io;
use std::path::PathBuf;

/// Minibank - savings and checking accounts behind a teller console
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file (defaults to MINIBANK_* environment variables)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print receipts as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TellerConfig::from_file(path)?,
        None => TellerConfig::from_env()?,
    };
    if cli.json {
        config.json_receipts = true;
    }

    // Logs go to stderr; stdout belongs to the console protocol
    let level: tracing::Level = config
        .log_level
        .parse()
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), Teller::new(config));
    console.run()?;

    Ok(())
}
