//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use partscout_collector::CollectorConfig;
use partscout_digikey::DigikeyConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "partscout.toml";

/// CLI configuration.
///
/// Credentials are never read from this file; they come from flags or the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Paths and pacing
    #[serde(default)]
    pub collector: CollectorConfig,

    /// API endpoint settings
    #[serde(default)]
    pub digikey: DigikeyConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./partscout.toml` is used
    /// when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.collector.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.collector.symbols_dir, PathBuf::from("symbols"));
        assert_eq!(config.collector.pacing_delay_ms, 1000);
        assert!(!config.digikey.sandbox);
    }

    #[test]
    fn test_from_toml_tables() {
        let config = Config::from_toml(
            r#"
            [collector]
            symbols_dir = "hw/symbols"
            json_output = "out/parts.json"

            [digikey]
            sandbox = true
            "#,
        )
        .unwrap();

        assert_eq!(config.collector.symbols_dir, PathBuf::from("hw/symbols"));
        assert_eq!(config.collector.json_output, PathBuf::from("out/parts.json"));
        assert_eq!(config.collector.native_output, PathBuf::from("objs.bin"));
        assert!(config.digikey.sandbox);
        assert_eq!(config.digikey.locale_currency, "USD");
    }

    #[test]
    fn test_from_toml_invalid_values() {
        let result = Config::from_toml("[collector]\nrecord_count = 0\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_from_toml_syntax_error() {
        let result = Config::from_toml("[collector\n");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partscout.toml");
        fs::write(&path, "[collector]\npacing_delay_ms = 0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.collector.pacing_delay_ms, 0);
    }
}
