//! Interactive cricket roster.
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cricket_roster::{JsonFileStore, RosterConfig, RosterService, Shell, UndoFidelity};

/// Manage a cricket player roster stored in a JSON file
#[derive(Parser)]
#[command(name = "cricket-roster")]
#[command(version, long_about = None)]
struct Cli {
    /// Roster data file (overrides CRICKET_ROSTER_FILE)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// How much of a player undo restores after an edit or delete
    /// (overrides CRICKET_ROSTER_UNDO)
    #[arg(long, value_enum)]
    undo: Option<UndoFidelity>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = RosterConfig::from_env();
    if let Some(file) = cli.file {
        config.data_file = file;
    }
    if let Some(undo) = cli.undo {
        config.undo_fidelity = undo;
    }

    let backend = JsonFileStore::new(&config.data_file);
    let roster = RosterService::open(backend, config.undo_fidelity)
        .with_context(|| format!("failed to open {}", config.data_file.display()))?;

    let stdin = io::stdin();
    let mut shell = Shell::new(roster, stdin.lock(), io::stdout());
    shell.run().context("roster shell aborted")?;

    Ok(())
}
