//! partscout CLI library.
//!
//! This library provides the core functionality for the partscout command-line
//! interface: argument parsing, configuration loading and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
