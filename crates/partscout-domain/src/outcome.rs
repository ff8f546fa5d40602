//! Per-part outcomes and the ordered result set of a run

use crate::{PartIdentifier, PartSummary};
use serde::{Deserialize, Serialize};

/// Result of fetching one part
///
/// Failures keep their slot in the result set so the persisted artifacts
/// show which parts could not be fetched and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchOutcome {
    /// Lookup and extraction succeeded
    Found {
        /// Part the summary belongs to
        part: PartIdentifier,
        /// Extracted fields
        summary: PartSummary,
    },

    /// Lookup or extraction failed
    Failed {
        /// Part that failed
        part: PartIdentifier,
        /// Error text
        reason: String,
    },
}

impl FetchOutcome {
    /// Identifier this outcome belongs to
    pub fn part(&self) -> &PartIdentifier {
        match self {
            FetchOutcome::Found { part, .. } | FetchOutcome::Failed { part, .. } => part,
        }
    }

    /// Summary, if the fetch succeeded
    pub fn summary(&self) -> Option<&PartSummary> {
        match self {
            FetchOutcome::Found { summary, .. } => Some(summary),
            FetchOutcome::Failed { .. } => None,
        }
    }

    /// Whether the fetch succeeded
    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found { .. })
    }
}

/// Ordered outcomes of one collection run, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    outcomes: Vec<FetchOutcome>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome
    pub fn push(&mut self, outcome: FetchOutcome) {
        self.outcomes.push(outcome);
    }

    /// Iterate outcomes in order
    pub fn iter(&self) -> std::slice::Iter<'_, FetchOutcome> {
        self.outcomes.iter()
    }

    /// Number of outcomes
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no parts were processed
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of successful fetches
    pub fn found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_found()).count()
    }

    /// Number of failed fetches
    pub fn failed_count(&self) -> usize {
        self.len() - self.found_count()
    }

    /// Look up the outcome for a part
    pub fn get(&self, part: &PartIdentifier) -> Option<&FetchOutcome> {
        self.outcomes.iter().find(|o| o.part() == part)
    }
}

impl FromIterator<FetchOutcome> for ResultSet {
    fn from_iter<T: IntoIterator<Item = FetchOutcome>>(iter: T) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FetchOutcome;
    type IntoIter = std::slice::Iter<'a, FetchOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
