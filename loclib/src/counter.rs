//! Traversal and counting.
//!
//! A [`Counter`] is the context of one counting run. It owns the options,
//! the set of canonical paths already counted and the per-extension tally,
//! so two runs never share state.
//!
//! Only the existence of top-level paths is checked; a failure there is the
//! one fatal error. Everything below a directory is trusted from the
//! directory listing, and any entry that cannot be counted contributes zero
//! lines and is reported as a [`Skip`] in the debug log.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::extension::extension_key;
use crate::lines::count_lines;
use crate::options::{CountOptions, LinePolicy};
use crate::resolve::{resolve, EntryKind};
use crate::stats::CountResult;
use crate::Result;

/// Why an entry contributed no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skip {
    /// The path was excluded
    Excluded,
    /// The canonical path was already counted in this run
    AlreadyCounted,
    /// The content is not valid text
    Binary,
    /// Neither a regular file nor a directory
    Unsupported,
    /// The entry could not be opened or read
    Unreadable,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Skip::Excluded => "excluded",
            Skip::AlreadyCounted => "already counted",
            Skip::Binary => "binary content",
            Skip::Unsupported => "unsupported entry kind",
            Skip::Unreadable => "unreadable",
        };
        f.write_str(reason)
    }
}

/// Result of visiting a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Lines counted in the entry (and its descendants)
    Counted(u64),
    /// The entry was not counted
    Skipped(Skip),
}

impl Outcome {
    /// Lines this outcome contributes to a total.
    pub fn lines(self) -> u64 {
        match self {
            Outcome::Counted(n) => n,
            Outcome::Skipped(_) => 0,
        }
    }
}

/// Traversal context for one counting run.
///
/// # Example
///
/// ```rust
/// use loclib::{CountOptions, Counter};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("x.py"), "a = 1\n\nb = 2\n").unwrap();
///
/// let mut counter = Counter::new(CountOptions::new());
/// assert_eq!(counter.count(dir.path()).unwrap(), 2);
/// // Already counted, contributes nothing the second time
/// assert_eq!(counter.count(dir.path().join("x.py")).unwrap(), 0);
/// assert_eq!(counter.finish().total, 2);
/// ```
#[derive(Debug)]
pub struct Counter {
    options: CountOptions,
    visited: HashSet<PathBuf>,
    tally: BTreeMap<String, u64>,
    total: u64,
}

impl Counter {
    /// Create a fresh counting context.
    pub fn new(options: CountOptions) -> Self {
        Self {
            options,
            visited: HashSet::new(),
            tally: BTreeMap::new(),
            total: 0,
        }
    }

    /// Options this run was created with.
    pub fn options(&self) -> &CountOptions {
        &self.options
    }

    /// Running total across all `count` calls so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count the lines under a top-level path and add them to the total.
    ///
    /// Returns the lines this call contributed. Paths reached earlier in the
    /// run, directly or through a symlink, contribute zero.
    pub fn count(&mut self, path: impl AsRef<Path>) -> Result<u64> {
        let resolved = resolve(path)?;
        let lines = self.visit(&resolved.canonical, resolved.kind).lines();
        self.total += lines;
        Ok(lines)
    }

    /// End the run and return its totals.
    pub fn finish(self) -> CountResult {
        CountResult {
            total: self.total,
            by_extension: self.options.by_extension.then_some(self.tally),
        }
    }

    fn visit(&mut self, path: &Path, kind: EntryKind) -> Outcome {
        if self.options.is_excluded(path) {
            debug!("Skipping excluded path '{}'.", path.display());
            return Outcome::Skipped(Skip::Excluded);
        }
        if self.visited.contains(path) {
            debug!("Skipping already counted path '{}'.", path.display());
            return Outcome::Skipped(Skip::AlreadyCounted);
        }

        match kind {
            EntryKind::Directory => self.visit_dir(path),
            EntryKind::Regular => self.visit_file(path),
            EntryKind::Other => {
                debug!("Skipping '{}': {}.", path.display(), Skip::Unsupported);
                Outcome::Skipped(Skip::Unsupported)
            }
        }
    }

    fn visit_dir(&mut self, dir: &Path) -> Outcome {
        debug!("Counting lines of code in directory '{}'.", dir.display());
        // Marked before descending so a symlink back to an ancestor is
        // seen as already counted.
        self.visited.insert(dir.to_path_buf());

        let mut total = 0;
        let children = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in children {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Cannot list entry in '{}': {e}", dir.display());
                    continue;
                }
            };
            let resolved = match resolve(entry.path()) {
                Ok(r) => r,
                Err(e) => {
                    debug!("Skipping '{}': {e}", entry.path().display());
                    continue;
                }
            };
            total += self.visit(&resolved.canonical, resolved.kind).lines();
        }

        debug!("{total} in '{}'.", dir.display());
        Outcome::Counted(total)
    }

    fn visit_file(&mut self, file: &Path) -> Outcome {
        debug!("Counting lines of code in file '{}'.", file.display());

        let lines = match read_lines(file, self.options.policy) {
            Ok(lines) => lines,
            Err(skip) => return Outcome::Skipped(skip),
        };

        self.visited.insert(file.to_path_buf());
        if self.options.by_extension {
            if let Some(key) = extension_key(file) {
                *self.tally.entry(key).or_default() += lines;
            }
        }

        debug!("{lines} in '{}'.", file.display());
        Outcome::Counted(lines)
    }
}

/// Open and count a single file. The handle is dropped on every path out.
fn read_lines(file: &Path, policy: LinePolicy) -> std::result::Result<u64, Skip> {
    let handle = File::open(file).map_err(|e| {
        warn!("Cannot open '{}': {e}", file.display());
        Skip::Unreadable
    })?;
    let mut reader = BufReader::new(handle);

    count_lines(&mut reader, policy).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            debug!("Cannot count lines in binary file '{}'.", file.display());
            Skip::Binary
        }
        _ => {
            warn!("Cannot read '{}': {e}", file.display());
            Skip::Unreadable
        }
    })
}

/// Count a single file on its own, outside of any run.
///
/// Fails only if `path` cannot be resolved. Directories and special files are
/// reported as [`Skip::Unsupported`].
pub fn count_file(path: impl AsRef<Path>, policy: LinePolicy) -> Result<Outcome> {
    let resolved = resolve(path)?;
    if resolved.kind != EntryKind::Regular {
        return Ok(Outcome::Skipped(Skip::Unsupported));
    }
    Ok(match read_lines(&resolved.canonical, policy) {
        Ok(lines) => Outcome::Counted(lines),
        Err(skip) => Outcome::Skipped(skip),
    })
}

/// Count every path in `paths` in one run.
///
/// Stops at the first top-level path that does not exist; no partial
/// result is returned in that case.
pub fn count_paths<P: AsRef<Path>>(paths: &[P], options: CountOptions) -> Result<CountResult> {
    let mut counter = Counter::new(options);
    for path in paths {
        counter.count(path)?;
    }
    Ok(counter.finish())
}
