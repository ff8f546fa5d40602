//! partscout Domain Layer
//!
//! Core types shared by every other crate in the workspace. Nothing here
//! talks to the network or the filesystem; the boundaries to those live
//! behind the traits in [`traits`].
//!
//! ## Key Concepts
//!
//! - **PartIdentifier**: part number inferred from a symbol file name
//! - **ProductRecord**: one record returned by a product lookup
//! - **PartSummary**: the flat set of fields kept from a record
//! - **FetchOutcome**: per-identifier result, found or failed
//! - **ResultSet**: ordered outcomes of one collection run

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod outcome;
pub mod part;
pub mod product;
pub mod summary;
pub mod traits;

// Re-exports for convenience
pub use outcome::{FetchOutcome, ResultSet};
pub use part::PartIdentifier;
pub use product::{Manufacturer, PriceBreak, ProductParameter, ProductRecord};
pub use summary::{PartSummary, TechnicalParameter};
