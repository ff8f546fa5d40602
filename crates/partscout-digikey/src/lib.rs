//! partscout Digi-Key Layer
//!
//! Implementations of the `PartLookup` trait from `partscout-domain`.
//!
//! # Lookups
//!
//! - `DigikeyClient`: Digi-Key product information API (manufacturer product details)
//! - `MockLookup`: Deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use partscout_digikey::MockLookup;
//! use partscout_domain::traits::PartLookup;
//! use partscout_domain::ProductRecord;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut lookup = MockLookup::default();
//! lookup.add_records("R1", vec![ProductRecord::default()]);
//! let records = lookup.lookup("R1", 10).await.unwrap();
//! assert_eq!(records.len(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod conversions;
pub mod wire;

use partscout_domain::traits::PartLookup;
use partscout_domain::ProductRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use client::DigikeyClient;
pub use config::{DigikeyConfig, DigikeyCredentials};

/// Errors that can occur while talking to the product API
#[derive(Error, Debug)]
pub enum DigikeyError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Token request rejected or credentials missing
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The service does not know the part number
    #[error("Part not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for DigikeyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DigikeyError::InvalidResponse(e.to_string())
        } else if e.is_timeout() {
            DigikeyError::Communication(format!("Request timed out: {}", e))
        } else {
            DigikeyError::Communication(e.to_string())
        }
    }
}

/// Mock lookup for deterministic testing
///
/// Returns pre-configured records without making any network calls. Part
/// numbers with nothing configured return an empty record list.
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    responses: Arc<Mutex<HashMap<String, Result<Vec<ProductRecord>, String>>>>,
    calls: Arc<Mutex<Vec<(String, u32)>>>,
}

impl MockLookup {
    /// Configure the records returned for a part number
    pub fn add_records(&mut self, part_number: impl Into<String>, records: Vec<ProductRecord>) {
        self.responses
            .lock()
            .unwrap()
            .insert(part_number.into(), Ok(records));
    }

    /// Configure a part number to fail with a communication error
    pub fn add_error(&mut self, part_number: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(part_number.into(), Err(message.into()));
    }

    /// Part numbers and record counts requested so far, in call order
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times lookup was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl PartLookup for MockLookup {
    type Error = DigikeyError;

    async fn lookup(
        &self,
        part_number: &str,
        record_count: u32,
    ) -> Result<Vec<ProductRecord>, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((part_number.to_string(), record_count));

        let responses = self.responses.lock().unwrap();
        match responses.get(part_number) {
            Some(Ok(records)) => Ok(records
                .iter()
                .take(record_count as usize)
                .cloned()
                .collect()),
            Some(Err(message)) => Err(DigikeyError::Communication(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}
