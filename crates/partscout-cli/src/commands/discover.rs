//! Discover command implementation.

use crate::config::Config;
use crate::error::Result;
use partscout_collector::{discover_parts, SymbolDirectory};
use partscout_domain::PartIdentifier;

/// Execute the discover command.
///
/// Prints one part number per line, in discovery order.
pub fn execute_discover(config: &Config) -> Result<Vec<PartIdentifier>> {
    let source = SymbolDirectory::new(&config.collector.symbols_dir);
    let parts = discover_parts(&source, &config.collector.symbol_extension)?;

    for part in &parts {
        println!("{}", part);
    }

    Ok(parts)
}
