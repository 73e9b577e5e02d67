//! Configuration management commands.

use clap::{Args, Subcommand};

use super::{get_config, print_success};
use crate::config::OutputFormat;
use crate::Cli;

/// Manage CLI configuration.
///
/// Configuration is stored in ~/.epoch/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Set the default UTC offset for calendar output
    #[command(name = "set-offset")]
    SetOffset {
        /// Offset such as +08:00; empty for local time
        #[arg(allow_hyphen_values = true)]
        offset: String,
    },
    /// Set the default output format
    #[command(name = "set-format")]
    SetFormat {
        /// yaml or json
        format: OutputFormat,
    },
    /// View the current configuration
    View,
}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::SetOffset { offset } => {
                let mut cfg = get_config(cli)?;
                cfg.set_offset(offset)?;
                if offset.is_empty() {
                    print_success("Offset reset to local time");
                } else {
                    print_success(&format!("Offset set to {}", offset));
                }
                Ok(())
            }

            ConfigSubcommand::SetFormat { format } => {
                let mut cfg = get_config(cli)?;
                cfg.set_format(*format)?;
                print_success(&format!("Output format set to {:?}", format));
                Ok(())
            }

            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;

                println!("Config file: {}", cfg.path().display());
                if cfg.offset.is_empty() {
                    println!("Offset: (local)");
                } else {
                    println!("Offset: {}", cfg.offset);
                }
                println!("Format: {:?}", cfg.format);

                Ok(())
            }
        }
    }
}
