//! Core Collector implementation

use crate::config::CollectorConfig;
use crate::discovery::{discover_parts, SymbolDirectory};
use crate::error::{CollectorError, Result};
use crate::extract::extract_summary;
use crate::persist::{write_json, write_native};
use partscout_domain::traits::PartLookup;
use partscout_domain::{FetchOutcome, PartIdentifier, ResultSet};
use std::fmt::Display;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Failure reason recorded for a symbol file with no part number
pub const EMPTY_PART_REASON: &str = "empty part number";

/// The Collector looks up every discovered part and persists the outcomes
///
/// Parts are processed strictly one after another, with the configured
/// pacing delay after every lookup.
pub struct Collector<L>
where
    L: PartLookup,
{
    lookup: L,
    config: CollectorConfig,
}

impl<L> Collector<L>
where
    L: PartLookup,
    L::Error: Display,
{
    /// Create a new Collector
    pub fn new(lookup: L, config: CollectorConfig) -> Result<Self> {
        config.validate().map_err(CollectorError::Config)?;
        Ok(Self { lookup, config })
    }

    /// Configuration in use
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Discover parts in the configured symbol directory
    ///
    /// # Errors
    ///
    /// Fails if the directory is missing or unreadable.
    pub fn discover(&self) -> Result<Vec<PartIdentifier>> {
        let source = SymbolDirectory::new(&self.config.symbols_dir);
        let parts = discover_parts(&source, &self.config.symbol_extension)?;
        info!(
            "Discovered {} parts in {}",
            parts.len(),
            self.config.symbols_dir.display()
        );
        Ok(parts)
    }

    /// Look up one part and extract its summary
    ///
    /// Never fails: lookup and extraction errors become a
    /// [`FetchOutcome::Failed`] carrying the error text. An empty identifier
    /// fails without a lookup.
    pub async fn fetch_part(&self, part: &PartIdentifier) -> FetchOutcome {
        let part_number = part.to_string();

        let result = if part.is_empty() {
            Err(EMPTY_PART_REASON.to_string())
        } else {
            match self
                .lookup
                .lookup(&part_number, self.config.record_count)
                .await
            {
                Ok(records) => {
                    debug!("{}: {} records returned", part, records.len());
                    extract_summary(&records).map_err(|e| e.to_string())
                }
                Err(e) => Err(e.to_string()),
            }
        };

        match result {
            Ok(summary) => FetchOutcome::Found {
                part: part.clone(),
                summary,
            },
            Err(reason) => {
                warn!("'{}': {}", part, reason);
                FetchOutcome::Failed {
                    part: part.clone(),
                    reason,
                }
            }
        }
    }

    /// Fetch every part in order, pausing after each lookup
    pub async fn fetch_all(&self, parts: &[PartIdentifier]) -> ResultSet {
        let start_time = Instant::now();
        let mut results = ResultSet::new();

        for (idx, part) in parts.iter().enumerate() {
            info!("[{}/{}] Looking up {}", idx + 1, parts.len(), part);
            results.push(self.fetch_part(part).await);
            tokio::time::sleep(self.config.pacing_delay()).await;
        }

        info!(
            "Fetch complete in {:.1}s: {} found, {} failed",
            start_time.elapsed().as_secs_f64(),
            results.found_count(),
            results.failed_count()
        );
        results
    }

    /// Write both artifacts for `results`
    pub fn persist(&self, results: &ResultSet) -> Result<()> {
        write_native(results, &self.config.native_output)?;
        write_json(results, &self.config.json_output)?;
        Ok(())
    }

    /// Discover, fetch and persist
    pub async fn run(&self) -> Result<ResultSet> {
        let parts = self.discover()?;
        let results = self.fetch_all(&parts).await;
        self.persist(&results)?;
        Ok(results)
    }
}
