//! Fetch command implementation.

use crate::cli::FetchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use partscout_collector::Collector;
use partscout_digikey::{DigikeyClient, DigikeyCredentials};
use tracing::info;

/// Resolve credentials from flags or environment (clap merges both).
pub fn credentials_from_args(args: &FetchArgs) -> Result<DigikeyCredentials> {
    let client_id = args
        .client_id
        .clone()
        .filter(|s| !s.trim().is_empty())
        .ok_or(CliError::MissingCredential("client id", "client-id", "DIGIKEY_CLIENT_ID"))?;
    let client_secret = args
        .client_secret
        .clone()
        .filter(|s| !s.trim().is_empty())
        .ok_or(CliError::MissingCredential(
            "client secret",
            "client-secret",
            "DIGIKEY_CLIENT_SECRET",
        ))?;

    Ok(DigikeyCredentials::new(client_id, client_secret))
}

/// Execute the fetch command.
pub async fn execute_fetch(args: FetchArgs, config: &Config) -> Result<()> {
    let credentials = credentials_from_args(&args)?;

    let mut digikey_config = config.digikey.clone();
    if let Some(sandbox) = args.sandbox {
        digikey_config.sandbox = sandbox;
    }

    let client = DigikeyClient::new(credentials, digikey_config)?;
    info!("Using product API at {}", client.base_url());

    let collector = Collector::new(client, config.collector.clone())?;
    let results = collector.run().await?;

    println!(
        "Fetched {} parts: {} found, {} failed",
        results.len(),
        results.found_count(),
        results.failed_count()
    );
    println!("  Native dump: {}", config.collector.native_output.display());
    println!("  JSON:        {}", config.collector.json_output.display());

    Ok(())
}
