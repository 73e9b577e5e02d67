//! Encoding commands: json, attr.

use clap::Args;
use epoch::{marshal, AttributeValue, Seconds, UnmarshalAttribute};

use super::{get_config, output_format, output_result, Report};
use crate::Cli;

/// Encode seconds as JSON, or decode JSON text.
///
/// Decoding `null` yields 0, the value of a fresh destination.
#[derive(Args)]
pub struct JsonCommand {
    /// Seconds to encode, or the JSON text to decode with --decode
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Decode the input instead of encoding it
    #[arg(short, long)]
    decode: bool,
}

impl JsonCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        if !self.decode {
            let seconds: Seconds = self.input.parse()?;
            println!("{}", seconds.marshal_json());
            return Ok(());
        }

        let cfg = get_config(cli)?;
        let mut seconds = Seconds::default();
        seconds.unmarshal_json(self.input.as_bytes())?;
        tracing::debug!(input = %self.input, seconds = seconds.as_i64(), "decoded json");
        output_result(&Report::new(seconds, cfg.fixed_offset()?), output_format(cli, &cfg))
    }
}

/// Encode seconds as an attribute value, or decode one.
///
/// The attribute value is given in its JSON form, e.g. {"N":"123"}. A record
/// without N decodes to 0.
#[derive(Args)]
pub struct AttrCommand {
    /// Seconds to encode, or the attribute value JSON to decode with --decode
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Decode the input instead of encoding it
    #[arg(short, long)]
    decode: bool,
}

impl AttrCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;

        if !self.decode {
            let seconds: Seconds = self.input.parse()?;
            return output_result(&marshal(&seconds), output_format(cli, &cfg));
        }

        let av: AttributeValue = serde_json::from_str(&self.input)
            .map_err(|e| anyhow::anyhow!("invalid attribute value '{}': {}", self.input, e))?;
        let mut seconds = Seconds::default();
        seconds.unmarshal_attribute(Some(&av))?;
        tracing::debug!(input = %self.input, seconds = seconds.as_i64(), "decoded attribute value");
        output_result(&Report::new(seconds, cfg.fixed_offset()?), output_format(cli, &cfg))
    }
}
