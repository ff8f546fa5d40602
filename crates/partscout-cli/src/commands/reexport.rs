//! Reexport command implementation.

use crate::config::Config;
use crate::error::Result;
use partscout_collector::reexport;

/// Execute the reexport command.
pub fn execute_reexport(config: &Config) -> Result<()> {
    let results = reexport(
        &config.collector.native_output,
        &config.collector.json_output,
    )?;

    println!(
        "Re-exported {} parts to {}",
        results.len(),
        config.collector.json_output.display()
    );
    Ok(())
}
