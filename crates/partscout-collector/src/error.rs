//! Error types for the Collector

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for collector operations
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Errors that abort a collection or re-export run
#[derive(Error, Debug)]
pub enum CollectorError {
    /// Symbol directory missing or unreadable
    #[error("Cannot read symbol directory {path}: {source}")]
    SymbolDirectory {
        /// Directory that was scanned
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O error while writing or reading an artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Native dump encoding or decoding error
    #[error("Native dump error: {0}")]
    Native(#[from] bincode::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a lookup response could not be turned into a summary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The lookup returned no records
    #[error("no product details returned")]
    NoProductDetails,

    /// A mandatory field was absent from the first record
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// The first record has no standard pricing tiers
    #[error("standard pricing list is empty")]
    NoPricing,
}
