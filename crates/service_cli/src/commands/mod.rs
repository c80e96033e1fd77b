//! CLI command implementations
//!
//! Each submodule implements a family of subcommands as plain functions over
//! a `RandomEngine<S>`; this module builds the engine for the configured mode
//! and routes the parsed command to them.

pub mod scalar;
pub mod sequence;
pub mod temporal;

use chrono::{DateTime, Utc};
use clap::Subcommand;
use std::io::Write;
use stoch_core::types::FidelityMode;
use stoch_sampling::{Precision, RandomEngine, SamplingStrategy, Speed};

use crate::config::StochConfig;
use crate::output::Report;
use crate::Result;

/// Subcommands of the `stoch` binary.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Raw 64-bit output words
    Words {
        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Integers in [0, MAX)
    Bounded {
        /// Exclusive upper bound
        max: u64,

        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Integers in [MIN, MAX], both inclusive
    #[command(allow_negative_numbers = true)]
    Between {
        /// Inclusive lower bound
        min: i64,

        /// Inclusive upper bound
        max: i64,

        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Percentages in [0, 1)
    Percent {
        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Draw single-precision values
        #[arg(long)]
        single: bool,
    },

    /// Random bytes as one hexadecimal string
    Bytes {
        /// Number of bytes
        #[arg(default_value = "16")]
        len: usize,
    },

    /// UUIDs built from 16 raw bytes
    Uuid {
        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Shuffled copy of the given items
    Shuffle {
        /// Items to shuffle
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Items picked uniformly from the given list
    Pick {
        /// Items to pick from
        #[arg(required = true)]
        items: Vec<String>,

        /// Number of picks (with replacement)
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Use one-pass reservoir selection instead of indexing
        #[arg(long)]
        stream: bool,
    },

    /// Timestamps, optionally within [FROM, TO]
    Timestamp {
        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Inclusive lower bound (RFC 3339)
        #[arg(long, requires = "to")]
        from: Option<DateTime<Utc>>,

        /// Inclusive upper bound (RFC 3339)
        #[arg(long, requires = "from")]
        to: Option<DateTime<Utc>>,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Words { .. } => "words",
            Command::Bounded { .. } => "bounded",
            Command::Between { .. } => "between",
            Command::Percent { .. } => "percent",
            Command::Bytes { .. } => "bytes",
            Command::Uuid { .. } => "uuid",
            Command::Shuffle { .. } => "shuffle",
            Command::Pick { .. } => "pick",
            Command::Timestamp { .. } => "timestamp",
        }
    }
}

/// Builds the engine named by `config` and runs `command`, writing to `out`.
pub fn execute<W: Write>(command: &Command, config: &StochConfig, out: &mut W) -> Result<()> {
    match config.mode {
        FidelityMode::Speed => run_with(engine::<Speed>(config)?, command, config, out),
        FidelityMode::Precision => run_with(engine::<Precision>(config)?, command, config, out),
    }
}

fn engine<S: SamplingStrategy>(config: &StochConfig) -> Result<RandomEngine<S>> {
    let rng = match config.seed {
        Some(seed) => RandomEngine::from_seed(seed),
        None => {
            let rng = RandomEngine::from_entropy()?;
            tracing::info!(seed = rng.seed(), "No seed configured; seeded from entropy");
            rng
        }
    };
    tracing::debug!(seed = rng.seed(), mode = %rng.mode(), "Engine ready");
    Ok(rng)
}

fn run_with<S: SamplingStrategy, W: Write>(
    mut rng: RandomEngine<S>,
    command: &Command,
    config: &StochConfig,
    out: &mut W,
) -> Result<()> {
    let seed = rng.seed();
    let mode = rng.mode();
    let name = command.name();
    let format = config.format;

    macro_rules! emit {
        ($values:expr) => {
            Report {
                command: name,
                seed,
                mode,
                values: $values,
            }
            .write_to(format, out)
        };
    }

    match command {
        Command::Words { count } => emit!(scalar::words(&mut rng, *count)),
        Command::Bounded { max, count } => emit!(scalar::bounded(&mut rng, *max, *count)),
        Command::Between { min, max, count } => {
            emit!(scalar::between(&mut rng, *min, *max, *count)?)
        }
        Command::Percent { count, single } => emit!(scalar::percent(&mut rng, *count, *single)),
        Command::Bytes { len } => emit!(vec![scalar::hex_bytes(&mut rng, *len)]),
        Command::Uuid { count } => emit!(scalar::uuids(&mut rng, *count)),
        Command::Shuffle { items } => emit!(sequence::shuffle(&mut rng, items)?),
        Command::Pick {
            items,
            count,
            stream,
        } => emit!(sequence::pick(&mut rng, items, *count, *stream)?),
        Command::Timestamp { count, from, to } => {
            emit!(temporal::timestamps(&mut rng, *count, *from, *to)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn seeded(seed: u64, mode: FidelityMode, format: OutputFormat) -> StochConfig {
        StochConfig {
            seed: Some(seed),
            mode,
            format,
            ..Default::default()
        }
    }

    fn run(command: Command, config: &StochConfig) -> String {
        let mut buffer = Vec::new();
        execute(&command, config, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_bounded_golden_text() {
        let config = seeded(1, FidelityMode::Precision, OutputFormat::Text);
        let output = run(Command::Bounded { max: 10, count: 3 }, &config);
        assert_eq!(output, "8\n9\n6\n");
    }

    #[test]
    fn test_mode_selects_strategy() {
        let config = seeded(1, FidelityMode::Speed, OutputFormat::Text);
        let output = run(Command::Bounded { max: 10, count: 5 }, &config);
        assert_eq!(output, "7\n5\n5\n3\n6\n");
    }

    #[test]
    fn test_json_report_carries_seed_and_mode() {
        let config = seeded(1, FidelityMode::Precision, OutputFormat::Json);
        let output = run(
            Command::Shuffle {
                items: ["1", "2", "3", "4", "5"].map(String::from).to_vec(),
            },
            &config,
        );
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["command"], "shuffle");
        assert_eq!(parsed["seed"], 1);
        assert_eq!(parsed["mode"], "precision");
        assert_eq!(parsed["values"], serde_json::json!(["1", "2", "4", "5", "3"]));
    }

    #[test]
    fn test_sampling_errors_propagate() {
        let config = seeded(1, FidelityMode::Precision, OutputFormat::Text);
        let mut buffer = Vec::new();
        let result = execute(
            &Command::Between {
                min: 5,
                max: 4,
                count: 1,
            },
            &config,
            &mut buffer,
        );
        assert!(matches!(result, Err(crate::CliError::Sampling(_))));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_entropy_seed_when_unconfigured() {
        let config = StochConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let output = run(Command::Words { count: 1 }, &config);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["seed"].is_u64());
    }
}
