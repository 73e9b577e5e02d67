//! Conversion commands: now, from, time, add.

use chrono::{DateTime, FixedOffset};
use clap::Args;
use epoch::Seconds;

use super::{get_config, output_format, output_result, parse_duration, Report};
use crate::config::parse_offset;
use crate::Cli;

/// Print the current time as seconds.
#[derive(Args)]
pub struct NowCommand {}

impl NowCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let now = Seconds::now();
        tracing::debug!(seconds = now.as_i64(), "current time");
        output_result(&Report::new(now, cfg.fixed_offset()?), output_format(cli, &cfg))
    }
}

/// Convert an RFC 3339 timestamp to seconds.
///
/// Any fractional seconds in the input are dropped.
#[derive(Args)]
pub struct FromCommand {
    /// Timestamp, e.g. 2024-01-15T10:30:00+08:00
    time: String,
}

impl FromCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let t = DateTime::parse_from_rfc3339(&self.time)
            .map_err(|e| anyhow::anyhow!("invalid timestamp '{}': {}", self.time, e))?;
        let seconds = Seconds::from_time(&t);
        tracing::debug!(input = %self.time, seconds = seconds.as_i64(), "parsed timestamp");
        output_result(&Report::new(seconds, Some(*t.offset())), output_format(cli, &cfg))
    }
}

/// Convert seconds to a calendar timestamp.
///
/// Without flags the configured offset is used, falling back to local time.
#[derive(Args)]
pub struct TimeCommand {
    /// Seconds since the Unix epoch
    #[arg(allow_negative_numbers = true)]
    seconds: Seconds,

    /// UTC offset, e.g. +08:00
    #[arg(long, conflicts_with_all = ["utc", "local"])]
    offset: Option<String>,

    /// Render in UTC
    #[arg(long, conflicts_with = "local")]
    utc: bool,

    /// Render in the local time zone
    #[arg(long)]
    local: bool,
}

impl TimeCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let offset = self.resolve_offset(cfg.fixed_offset()?)?;
        tracing::debug!(seconds = self.seconds.as_i64(), ?offset, "rendering time");
        output_result(&Report::new(self.seconds, offset), output_format(cli, &cfg))
    }

    fn resolve_offset(
        &self,
        configured: Option<FixedOffset>,
    ) -> anyhow::Result<Option<FixedOffset>> {
        if self.utc {
            return Ok(FixedOffset::east_opt(0));
        }
        if self.local {
            return Ok(None);
        }
        match &self.offset {
            Some(s) => parse_offset(s).map(Some),
            None => Ok(configured),
        }
    }
}

/// Add a duration to seconds.
///
/// Sub-second parts of the duration are truncated toward zero.
#[derive(Args)]
pub struct AddCommand {
    /// Seconds since the Unix epoch
    #[arg(allow_negative_numbers = true)]
    seconds: Seconds,

    /// Duration, e.g. 1h30m, 90s, -1500ms
    #[arg(allow_hyphen_values = true)]
    duration: String,
}

impl AddCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let d = parse_duration(&self.duration)?;
        let seconds = self.seconds.add(d);
        tracing::debug!(
            from = self.seconds.as_i64(),
            delta_ms = d.num_milliseconds(),
            to = seconds.as_i64(),
            "added duration"
        );
        output_result(&Report::new(seconds, cfg.fixed_offset()?), output_format(cli, &cfg))
    }
}
