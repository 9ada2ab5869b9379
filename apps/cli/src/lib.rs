//! # hotel-cli: Command-Line Front End
//!
//! Two ways in: scripted subcommands for one-shot operations, and the
//! interactive menu for working at a terminal.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          hotel-cli                                      │
//! │                                                                         │
//! │  main.rs                                                               │
//! │    ├── Cli::parse()            (cli.rs, clap derive)                   │
//! │    ├── AppConfig::load()       (config.rs, TOML + HOTEL_* env)         │
//! │    ├── init_tracing()          (stderr, EnvFilter)                     │
//! │    └── cli::execute()                                                  │
//! │          ├── hotel / customer / reservation subcommands                │
//! │          └── menu ──► Menu::run() (menu.rs, stdin/stdout)              │
//! │                                                                         │
//! │  Everything below goes through hotel_store::Stores.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod menu;

use std::io::{self, Write};

use serde::Serialize;

pub use cli::{execute, Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use menu::Menu;

/// Writes each record as one compact JSON object per line.
pub fn write_json_lines<T: Serialize>(out: &mut impl Write, records: &[T]) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
