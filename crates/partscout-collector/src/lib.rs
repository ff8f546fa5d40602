//! partscout Collector
//!
//! Builds a parts database from a directory of symbol files.
//!
//! # Overview
//!
//! Every symbol file name encodes a manufacturer part number. The collector
//! infers those part numbers, looks each one up through a [`PartLookup`]
//! implementation, keeps a fixed set of fields from the first matching
//! record and writes the outcomes to disk.
//!
//! # Architecture
//!
//! ```text
//! symbols/*.svg → discovery → lookup (paced) → extract → ResultSet → objs.bin + data.json
//!                                                     objs.bin → reexport → data.json
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use partscout_collector::{Collector, CollectorConfig};
//! use partscout_digikey::{DigikeyClient, DigikeyConfig, DigikeyCredentials};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = DigikeyCredentials::new("client-id", "client-secret");
//! let lookup = DigikeyClient::new(credentials, DigikeyConfig::default())?;
//! let collector = Collector::new(lookup, CollectorConfig::default())?;
//!
//! let results = collector.run().await?;
//! println!("Found: {}", results.found_count());
//! println!("Failed: {}", results.failed_count());
//! # Ok(())
//! # }
//! ```
//!
//! [`PartLookup`]: partscout_domain::traits::PartLookup

#![warn(missing_docs)]

mod collector;
mod config;
mod discovery;
mod error;
mod extract;
mod persist;

pub use collector::{Collector, EMPTY_PART_REASON};
pub use config::{CollectorConfig, DEFAULT_PACING_DELAY_MS, DEFAULT_RECORD_COUNT};
pub use discovery::{discover_parts, identifiers_from_names, SymbolDirectory};
pub use error::{CollectorError, ExtractError, Result};
pub use extract::extract_summary;
pub use persist::{read_native, reexport, render_json, write_json, write_native, ERROR_KEY};
