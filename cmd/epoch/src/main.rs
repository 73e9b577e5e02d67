//! Epoch CLI - convert and encode Unix epoch seconds.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{
    AddCommand, AttrCommand, ConfigCommand, FromCommand, JsonCommand, NowCommand, TimeCommand,
};

/// Epoch CLI - convert and encode Unix epoch seconds.
///
/// This tool covers every conversion of the epoch library:
///   - Current time and calendar time to seconds
///   - Seconds to calendar time in any fixed offset
///   - Duration arithmetic
///   - JSON and attribute value encodings
///
/// Configuration is stored in ~/.epoch/config.yaml.
#[derive(Parser)]
#[command(name = "epoch")]
#[command(about = "Unix epoch seconds tool")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.epoch/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output as JSON (overrides the configured format)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),
    /// Print the current time as seconds
    Now(NowCommand),
    /// Convert an RFC 3339 timestamp to seconds
    #[command(name = "from")]
    FromTime(FromCommand),
    /// Convert seconds to a calendar timestamp
    Time(TimeCommand),
    /// Add a duration to seconds
    Add(AddCommand),
    /// Encode or decode the JSON form
    Json(JsonCommand),
    /// Encode or decode the attribute value form
    Attr(AttrCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli),
        Commands::Now(cmd) => cmd.run(&cli),
        Commands::FromTime(cmd) => cmd.run(&cli),
        Commands::Time(cmd) => cmd.run(&cli),
        Commands::Add(cmd) => cmd.run(&cli),
        Commands::Json(cmd) => cmd.run(&cli),
        Commands::Attr(cmd) => cmd.run(&cli),
    }
}
