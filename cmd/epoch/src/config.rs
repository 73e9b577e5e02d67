//! Configuration management for the epoch CLI.
//!
//! Configuration is stored in ~/.epoch/config.yaml

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".epoch";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML format (default).
    #[default]
    Yaml,
    /// JSON format.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("unknown output format '{}', want yaml or json", s),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default UTC offset for calendar output, e.g. "+08:00". Empty means the
    /// local time zone.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub offset: String,

    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

impl Config {
    /// Gets the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the configuration to disk, creating its directory if needed.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Sets the default offset. An empty string resets it to local time.
    pub fn set_offset(&mut self, offset: &str) -> anyhow::Result<()> {
        if !offset.is_empty() {
            parse_offset(offset)?;
        }
        self.offset = offset.to_string();
        self.save()
    }

    /// Sets the default output format.
    pub fn set_format(&mut self, format: OutputFormat) -> anyhow::Result<()> {
        self.format = format;
        self.save()
    }

    /// Returns the configured offset, or None for local time.
    pub fn fixed_offset(&self) -> anyhow::Result<Option<FixedOffset>> {
        if self.offset.is_empty() {
            return Ok(None);
        }
        parse_offset(&self.offset).map(Some)
    }
}

/// Parses a UTC offset such as "+08:00" or "-0500".
pub fn parse_offset(s: &str) -> anyhow::Result<FixedOffset> {
    s.parse::<FixedOffset>()
        .map_err(|e| anyhow::anyhow!("invalid offset '{}': {}", s, e))
}

/// Loads the configuration. A missing file yields the defaults and is only
/// written by [`Config::save`].
pub fn load_config(custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path()
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    let mut cfg = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        serde_yaml::from_str::<Option<Config>>(&content)?.unwrap_or_default()
    } else {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        Config::default()
    };

    cfg.config_path = config_path;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let cfg = load_config(path.to_str()).unwrap();
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
        assert!(cfg.offset.is_empty());
        assert_eq!(cfg.format, OutputFormat::Yaml);
        assert_eq!(cfg.path(), path.as_path());
    }

    #[test]
    fn test_set_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut cfg = load_config(path.to_str()).unwrap();
        cfg.set_format(OutputFormat::Json).unwrap();
        assert!(path.exists());

        let cfg = load_config(path.to_str()).unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut cfg = load_config(path.to_str()).unwrap();
        cfg.set_offset("+08:00").unwrap();
        cfg.set_format(OutputFormat::Json).unwrap();

        let cfg = load_config(path.to_str()).unwrap();
        assert_eq!(cfg.offset, "+08:00");
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(
            cfg.fixed_offset().unwrap(),
            FixedOffset::east_opt(8 * 3600)
        );
    }

    #[test]
    fn test_set_offset_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut cfg = load_config(path.to_str()).unwrap();
        assert!(cfg.set_offset("eight").is_err());
        assert!(cfg.offset.is_empty());
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(
            parse_offset("-05:00").unwrap(),
            FixedOffset::west_opt(5 * 3600).unwrap()
        );
        assert!(parse_offset("+25:00").is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
