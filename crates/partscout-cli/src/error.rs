//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential not supplied by flag or environment
    #[error("Missing {0}: pass --{1} or set {2}")]
    MissingCredential(&'static str, &'static str, &'static str),

    /// Collector error
    #[error(transparent)]
    Collector(#[from] partscout_collector::CollectorError),

    /// API client error
    #[error(transparent)]
    Digikey(#[from] partscout_digikey::DigikeyError),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
