//! Path resolution: canonical paths and entry classification.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LocError;
use crate::Result;

/// Kind of filesystem entry a canonical path points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A regular file
    Regular,
    /// A directory
    Directory,
    /// Sockets, devices, fifos and the like
    Other,
}

impl EntryKind {
    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_file() {
            EntryKind::Regular
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

/// A path with symlinks and relative segments resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Canonical absolute path, used as the deduplication key
    pub canonical: PathBuf,
    /// What the canonical path is
    pub kind: EntryKind,
}

/// Resolve `path` to its canonical form and classify it.
///
/// Fails with [`LocError::PathNotFound`] when `path` does not exist (this
/// includes dangling symlinks).
pub fn resolve(path: impl AsRef<Path>) -> Result<ResolvedPath> {
    let path = path.as_ref();
    let canonical = path
        .canonicalize()
        .map_err(|e| LocError::from_io(path, e))?;
    // Canonical paths contain no symlinks, so this is the target's own type.
    let kind = fs::symlink_metadata(&canonical)
        .map(|m| EntryKind::from_file_type(m.file_type()))
        .map_err(|e| LocError::from_io(path, e))?;

    Ok(ResolvedPath { canonical, kind })
}
