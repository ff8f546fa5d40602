//! Part identifier discovery from symbol file names

use crate::error::CollectorError;
use partscout_domain::traits::SymbolSource;
use partscout_domain::PartIdentifier;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Symbol files in a local directory
#[derive(Debug, Clone)]
pub struct SymbolDirectory {
    path: PathBuf,
}

impl SymbolDirectory {
    /// Create a source over `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory being listed
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SymbolSource for SymbolDirectory {
    type Error = CollectorError;

    /// Entry names in directory order
    fn list_symbol_files(&self) -> Result<Vec<String>, Self::Error> {
        let read_error = |source| CollectorError::SymbolDirectory {
            path: self.path.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!("Skipping non UTF-8 file name {:?}", raw),
            }
        }
        Ok(names)
    }
}

/// Derive unique identifiers from file names, keeping first-seen order
///
/// Only names ending with `extension` are considered.
pub fn identifiers_from_names<I, S>(names: I, extension: &str) -> Vec<PartIdentifier>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut parts = Vec::new();

    for name in names {
        let name = name.as_ref();
        if !name.ends_with(extension) {
            continue;
        }

        let part = PartIdentifier::from_file_name(name);
        if part.is_empty() {
            warn!("'{}' has no part number before the first '_' or '.'", name);
        }

        if seen.insert(part.clone()) {
            parts.push(part);
        } else {
            debug!("'{}' repeats part {}", name, part);
        }
    }

    parts
}

/// List a symbol source and derive its part identifiers
pub fn discover_parts<S: SymbolSource>(
    source: &S,
    extension: &str,
) -> Result<Vec<PartIdentifier>, S::Error> {
    let names = source.list_symbol_files()?;
    Ok(identifiers_from_names(names, extension))
}
