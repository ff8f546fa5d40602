//! partscout CLI - collect distributor data for the parts behind symbol files.

use clap::Parser;
use partscout_cli::commands;
use partscout_cli::{Cli, Command, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr, command output to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> partscout_cli::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Fetch(args) => commands::execute_fetch(args, &config).await?,
        Command::Reexport => commands::execute_reexport(&config)?,
        Command::Discover => {
            commands::execute_discover(&config)?;
        }
    }

    Ok(())
}
