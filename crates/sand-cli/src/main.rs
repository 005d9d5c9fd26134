use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sand_cli::commands::query::Day;
use sand_cli::commands::{init, query, start, status, stop};
use sand_cli::display::Palette;
use sand_cli::{Cli, Commands, Config};
use sand_core::{SystemClock, Tracker};
use sand_store::FileStorage;

/// Resolves the tracking file from the pointer and binds a tracker to it.
fn open_tracker(config: &Config) -> Result<Tracker<FileStorage, SystemClock>> {
    let log_path = sand_core::tracking_file_path(&FileStorage, &config.pointer_path)?;
    tracing::debug!(log = %log_path.display(), "resolved tracking file");
    Ok(Tracker::new(FileStorage, log_path, SystemClock))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let palette = Palette::detect();
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Init { file }) => {
            init::run(&mut stdout, &FileStorage, &config.pointer_path, file)?;
        }
        Some(Commands::Start { activity }) => {
            let tracker = open_tracker(&config)?;
            start::run(&mut stdout, &tracker, activity, palette)?;
        }
        Some(Commands::Stop) => {
            let tracker = open_tracker(&config)?;
            stop::run(&mut stdout, &tracker, palette)?;
        }
        Some(Commands::Status) => {
            let tracker = open_tracker(&config)?;
            status::run(&mut stdout, &tracker, palette)?;
        }
        Some(Commands::Today { sum }) => {
            let tracker = open_tracker(&config)?;
            query::run_day(&mut stdout, &tracker, Day::Today, *sum, palette)?;
        }
        Some(Commands::Yesterday { sum }) => {
            let tracker = open_tracker(&config)?;
            query::run_day(&mut stdout, &tracker, Day::Yesterday, *sum, palette)?;
        }
        Some(Commands::Query { terms, sum }) => {
            let tracker = open_tracker(&config)?;
            query::run(&mut stdout, &tracker, &terms.join(" "), *sum, palette)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
