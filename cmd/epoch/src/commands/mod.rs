//! CLI commands module.

mod codec;
mod config;
mod convert;
mod duration;
mod util;

pub use codec::{AttrCommand, JsonCommand};
pub use config::ConfigCommand;
pub use convert::{AddCommand, FromCommand, NowCommand, TimeCommand};

// Re-export utils for use in commands
pub(crate) use duration::parse_duration;
pub(crate) use util::*;
