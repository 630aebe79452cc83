//! Error types for loclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a counting run.
///
/// Anything that only affects a single nested entry (binary content,
/// sockets, unreadable files) is not an error; see [`crate::Skip`].
#[derive(Error, Debug)]
pub enum LocError {
    /// A top-level path does not exist
    #[error("Path '{}' does not exist!", .path.display())]
    PathNotFound { path: PathBuf },

    /// A top-level path exists but could not be inspected
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LocError {
    /// Build the error for a failed lookup of `path`, keeping the path as given.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LocError::PathNotFound { path }
        } else {
            LocError::Io { path, source }
        }
    }
}
