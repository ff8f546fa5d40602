//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::ProductRecord;
use std::future::Future;

/// Trait for looking up product details by manufacturer part number
///
/// Implemented by the infrastructure layer (partscout-digikey)
pub trait PartLookup {
    /// Error type for lookup operations
    type Error;

    /// Fetch up to `record_count` product records matching `part_number`
    ///
    /// An empty vector means the service knows no matching product.
    fn lookup(
        &self,
        part_number: &str,
        record_count: u32,
    ) -> impl Future<Output = Result<Vec<ProductRecord>, Self::Error>> + Send;
}

/// Trait for listing symbol file names
///
/// Implemented by the application layer (partscout-collector)
pub trait SymbolSource {
    /// Error type for listing operations
    type Error;

    /// List the file names available in this source, in source order
    fn list_symbol_files(&self) -> Result<Vec<String>, Self::Error>;
}

impl SymbolSource for Vec<String> {
    type Error = std::convert::Infallible;

    fn list_symbol_files(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.clone())
    }
}
