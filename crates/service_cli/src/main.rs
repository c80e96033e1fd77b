//! Stoch CLI - Command Line Access to the Random Engine
//!
//! This is the operational entry point for the stoch sampling library.
//!
//! # Commands
//!
//! - `stoch words -n 4` - Raw 64-bit output words
//! - `stoch bounded 10 -n 3` - Integers in [0, 10)
//! - `stoch between -- -5 5` - Integers in [-5, 5]
//! - `stoch percent --single` - Percentages in [0, 1)
//! - `stoch bytes 32` - Random bytes as hex
//! - `stoch uuid` - UUIDs from raw bytes
//! - `stoch shuffle a b c` - Shuffled copy of the items
//! - `stoch pick a b c -n 2` - Uniform picks from the items
//! - `stoch timestamp --from 2024-01-01T00:00:00Z --to 2024-12-31T00:00:00Z`
//!
//! # Reproducibility
//!
//! With a seed configured (`--seed`, `STOCH_SEED` or the config file) every
//! run prints the same values. Without one the engine is seeded from the
//! operating system and the chosen seed is logged at info level and included
//! in JSON output.
//!
//! # Architecture
//!
//! As part of the service layer, this crate only wires configuration and
//! output around `stoch_sampling`; all sampling semantics live in the engine
//! crates.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::Command;
use config::{build_config, CliArgs, ENV_FORMAT, ENV_LOG_LEVEL, ENV_MODE, ENV_SEED};
pub use error::{CliError, Result};

/// Stoch deterministic random engine CLI
#[derive(Parser, Debug)]
#[command(name = "stoch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed, decimal or 0x-prefixed hexadecimal
    #[arg(short, long, global = true, env = ENV_SEED)]
    seed: Option<String>,

    /// Fidelity mode (speed, precision)
    #[arg(short, long, global = true, env = ENV_MODE)]
    mode: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = ENV_LOG_LEVEL)]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true, env = ENV_FORMAT)]
    format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed.clone(),
            mode: cli.mode.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::debug!(
        command = cli.command.name(),
        seed = ?config.seed,
        mode = %config.mode,
        format = %config.format,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&cli.command, &config, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_range() {
        let cli = Cli::try_parse_from(["stoch", "--seed", "0x1", "between", "-5", "5"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Between {
                min: -5,
                max: 5,
                count: 1
            }
        );
        assert_eq!(cli.seed.as_deref(), Some("0x1"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["stoch", "bounded", "10", "-n", "3", "--format", "json"])
            .unwrap();
        assert_eq!(cli.command, Command::Bounded { max: 10, count: 3 });
        assert_eq!(cli.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_timestamp_bounds_require_each_other() {
        assert!(Cli::try_parse_from(["stoch", "timestamp", "--from", "2024-01-01T00:00:00Z"]).is_err());
        assert!(Cli::try_parse_from([
            "stoch",
            "timestamp",
            "--from",
            "2024-01-01T00:00:00Z",
            "--to",
            "2024-02-01T00:00:00Z"
        ])
        .is_ok());
    }

    #[test]
    fn test_shuffle_requires_items() {
        assert!(Cli::try_parse_from(["stoch", "shuffle"]).is_err());
    }
}
