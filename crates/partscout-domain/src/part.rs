//! Part identifiers inferred from symbol file names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part number inferred from a symbol file name
///
/// Symbol files are named `<part>_<variant>.<ext>`, e.g. `RC0603FR-0710KL_0.svg`.
/// The identifier is everything before the first underscore, cut again at
/// the first dot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartIdentifier(String);

impl PartIdentifier {
    /// Wrap an already-canonical part number
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive an identifier from a symbol file name
    ///
    /// The result may be empty (e.g. for `_0.svg`); such an identifier is
    /// still a discovered part and fails at lookup time.
    ///
    /// # Examples
    ///
    /// ```
    /// use partscout_domain::PartIdentifier;
    ///
    /// let id = PartIdentifier::from_file_name("R1_0.svg");
    /// assert_eq!(id.as_str(), "R1");
    ///
    /// // No underscore: cut at the first dot only
    /// let id = PartIdentifier::from_file_name("C2.svg");
    /// assert_eq!(id.as_str(), "C2");
    ///
    /// assert!(PartIdentifier::from_file_name("_0.svg").is_empty());
    /// ```
    pub fn from_file_name(file_name: &str) -> Self {
        // split() always yields at least one item, the whole string when the separator is absent
        let before_underscore = file_name.split('_').next().unwrap_or(file_name);
        let token = before_underscore
            .split('.')
            .next()
            .unwrap_or(before_underscore);
        Self(token.to_string())
    }

    /// True when no part number could be derived
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PartIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
