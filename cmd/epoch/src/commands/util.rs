//! Utility functions for CLI commands.

use chrono::{FixedOffset, Local, SecondsFormat};
use epoch::Seconds;
use serde::Serialize;

use crate::config::{load_config, Config, OutputFormat};
use crate::Cli;

/// Gets the global configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(cli.config.as_deref())
}

/// Resolves the output format from flags and configuration.
pub fn output_format(cli: &Cli, cfg: &Config) -> OutputFormat {
    if cli.json {
        OutputFormat::Json
    } else {
        cfg.format
    }
}

/// A converted timestamp, as printed by the conversion commands.
#[derive(Debug, Serialize)]
pub struct Report {
    pub seconds: Seconds,
    pub time: String,
}

impl Report {
    /// Builds a report, rendering the calendar time in `offset` or local time.
    pub fn new(seconds: Seconds, offset: Option<FixedOffset>) -> Self {
        let time = match offset {
            Some(tz) => seconds
                .time_in(&tz)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            None => seconds
                .time_in(&Local)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        Self { seconds, time }
    }
}

/// Outputs result as JSON or YAML.
pub fn output_result<T: Serialize>(result: &T, format: OutputFormat) -> anyhow::Result<()> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Yaml => serde_yaml::to_string(result)?,
    };

    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}
