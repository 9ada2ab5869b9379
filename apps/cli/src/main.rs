//! # hotel-cli Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration (file, `HOTEL_*` env, `--data-dir`)
//! 3. Initialize tracing on stderr
//! 4. Run the command (the interactive menu when none is given)

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use hotel_cli::{execute, AppConfig, Cli, Command};
use hotel_store::Stores;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.override_data_dir(dir);
    }

    init_tracing(&config.logging.filter);

    let stores = Stores::new(config.store_config());
    info!(
        hotels = %stores.config().hotels_path.display(),
        "hotel-cli starting"
    );

    let stdin = io::stdin();
    execute(
        cli.command.unwrap_or(Command::Menu),
        &stores,
        stdin.lock(),
        io::stdout().lock(),
    )
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hotel_store=trace` - Trace the store crate only
/// - Default: the configured filter (`warn,hotel=info` unless changed)
///
/// Output goes to stderr so menu and JSON output on stdout stay clean.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
