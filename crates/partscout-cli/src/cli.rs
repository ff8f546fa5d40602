//! CLI command definitions and argument parsing.

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// partscout - Collect distributor data for the parts behind your symbol files.
#[derive(Debug, Parser)]
#[command(name = "partscout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: ./partscout.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up every part found in the symbol directory and write the results
    Fetch(FetchArgs),

    /// Rewrite the JSON output from the native dump, without any lookups
    Reexport,

    /// List the part numbers inferred from the symbol directory
    Discover,
}

/// Arguments for the fetch command.
#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// API client id
    #[arg(long, env = "DIGIKEY_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// API client secret
    #[arg(long, env = "DIGIKEY_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Use the sandbox API (overrides the config file)
    #[arg(long, env = "DIGIKEY_CLIENT_SANDBOX", value_parser = BoolishValueParser::new())]
    pub sandbox: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_with_flags() {
        let cli = Cli::try_parse_from([
            "partscout",
            "fetch",
            "--client-id",
            "abc",
            "--client-secret",
            "xyz",
            "--sandbox",
            "false",
        ])
        .unwrap();

        match cli.command {
            Command::Fetch(args) => {
                assert_eq!(args.client_id.as_deref(), Some("abc"));
                assert_eq!(args.client_secret.as_deref(), Some("xyz"));
                assert_eq!(args.sandbox, Some(false));
            }
            other => panic!("Expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["partscout", "reexport", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::Reexport));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["partscout"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
