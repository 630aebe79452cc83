//! Input options for line counting.
//!
//! A [`CountOptions`] value is built once, before any path is visited, and
//! stays unchanged for the whole run.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LocError;
use crate::Result;

/// Which lines of a file contribute to the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinePolicy {
    /// Only lines with at least one character besides spaces and tabs
    #[default]
    IgnoreBlank,
    /// Every line record, blank or not
    CountBlank,
}

/// Options for a counting run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    /// Blank line handling
    pub policy: LinePolicy,
    /// Whether to keep a per-extension tally
    pub by_extension: bool,
    /// Canonical paths that are never counted or descended into
    pub excluded: BTreeSet<PathBuf>,
}

impl CountOptions {
    /// Create new default options (blank lines ignored, no breakdown).
    pub fn new() -> Self {
        Self::default()
    }

    /// Count blank lines too.
    pub fn count_blank(mut self, count_blank: bool) -> Self {
        self.policy = if count_blank {
            LinePolicy::CountBlank
        } else {
            LinePolicy::IgnoreBlank
        };
        self
    }

    /// Keep a per-extension tally.
    pub fn by_extension(mut self, enabled: bool) -> Self {
        self.by_extension = enabled;
        self
    }

    /// Exclude a path.
    ///
    /// The path is resolved right away, so later comparisons are made
    /// against canonical paths. A path that does not exist cannot match
    /// anything during traversal; it is kept in absolute form rather than
    /// rejected.
    pub fn exclude(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let resolved = match path.canonicalize() {
            Ok(canonical) => canonical,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                std::path::absolute(path).map_err(|e| LocError::from_io(path, e))?
            }
            Err(e) => return Err(LocError::from_io(path, e)),
        };
        self.excluded.insert(resolved);
        Ok(self)
    }

    /// Exclude multiple paths.
    pub fn exclude_many<P: AsRef<Path>>(mut self, paths: &[P]) -> Result<Self> {
        for path in paths {
            self = self.exclude(path)?;
        }
        Ok(self)
    }

    /// Check whether a canonical path was excluded.
    pub fn is_excluded(&self, canonical: &Path) -> bool {
        self.excluded.contains(canonical)
    }
}
