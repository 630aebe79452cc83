//! Aggregated results of a counting run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Totals for one counting run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Grand total of counted lines
    pub total: u64,
    /// Lines per extension bucket, present only in extension mode
    pub by_extension: Option<BTreeMap<String, u64>>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that fell into no extension bucket.
    ///
    /// Always zero when no per-extension tally was kept.
    pub fn misc(&self) -> u64 {
        match &self.by_extension {
            Some(tally) => self.total - tally.values().sum::<u64>(),
            None => 0,
        }
    }
}
