//! Summary of a generation run, printed as text or JSON by the CLI.

use serde::Serialize;
use std::path::PathBuf;

/// Placeholder left in a generated file after substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedPlaceholder {
    /// File that still contains the token
    pub file: PathBuf,
    /// The token text, including brackets
    pub token: String,
}

/// Files produced (or, in dry-run mode, planned) by a generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Paths in the order they were written
    pub written: Vec<PathBuf>,
    /// Placeholders that survived substitution
    pub unresolved: Vec<UnresolvedPlaceholder>,
    /// True when nothing was actually written
    pub dry_run: bool,
}

impl GenerationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Appends another report's entries to this one.
    pub fn merge(&mut self, other: Self) {
        self.written.extend(other.written);
        self.unresolved.extend(other.unresolved);
    }

    /// Number of files written (or planned).
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.written.len()
    }
}
