//! Rendering of drawn values.

use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use stoch_core::types::FidelityMode;

use crate::config::OutputFormat;
use crate::Result;

/// Values drawn by one subcommand, with what is needed to replay them.
#[derive(Debug, Serialize)]
pub struct Report<T> {
    pub command: &'static str,
    pub seed: u64,
    pub mode: FidelityMode,
    pub values: Vec<T>,
}

impl<T: Serialize + Display> Report<T> {
    /// Writes the report in the requested format.
    ///
    /// Text output is one value per line; seed and mode are only in JSON.
    pub fn write_to<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for value in &self.values {
                    writeln!(out, "{}", value)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report<u64> {
        Report {
            command: "bounded",
            seed: 1,
            mode: FidelityMode::Precision,
            values: vec![8, 9, 6],
        }
    }

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        report().write_to(OutputFormat::Text, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "8\n9\n6\n");
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        report().write_to(OutputFormat::Json, &mut buffer).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["command"], "bounded");
        assert_eq!(parsed["seed"], 1);
        assert_eq!(parsed["mode"], "precision");
        assert_eq!(parsed["values"], serde_json::json!([8, 9, 6]));
    }
}
