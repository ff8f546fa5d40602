//! Configuration for the Collector

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Records requested per lookup; only the first is used
pub const DEFAULT_RECORD_COUNT: u32 = 10;

/// Wait after every lookup to stay under the service's rate limit
pub const DEFAULT_PACING_DELAY_MS: u64 = 1000;

/// Configuration for the Collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Directory holding the symbol files
    pub symbols_dir: PathBuf,

    /// Only file names ending with this suffix are considered
    pub symbol_extension: String,

    /// Records requested per lookup
    pub record_count: u32,

    /// Delay after each lookup (milliseconds)
    pub pacing_delay_ms: u64,

    /// Native dump of the result set
    pub native_output: PathBuf,

    /// JSON rendering of the result set
    pub json_output: PathBuf,
}

impl CollectorConfig {
    /// Get the pacing delay as a Duration
    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol_extension.is_empty() {
            return Err("symbol_extension must not be empty".to_string());
        }
        if self.record_count == 0 {
            return Err("record_count must be greater than 0".to_string());
        }
        if self.native_output == self.json_output {
            return Err("native_output and json_output must be different files".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            symbols_dir: PathBuf::from("symbols"),
            symbol_extension: ".svg".to_string(),
            record_count: DEFAULT_RECORD_COUNT,
            pacing_delay_ms: DEFAULT_PACING_DELAY_MS,
            native_output: PathBuf::from("objs.bin"),
            json_output: PathBuf::from("data.json"),
        }
    }
}
