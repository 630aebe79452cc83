//! # loclib
//!
//! Counts logical lines of code across files and directories.
//!
//! ## Overview
//!
//! Paths are resolved to canonical form (symlinks and `..` segments
//! resolved) before anything is counted, and each canonical path is counted
//! at most once per run. This keeps totals honest when the same file is
//! passed twice, reachable through a symlink, or nested inside another
//! argument.
//!
//! - **Blank lines**: ignored by default; a line counts only if it holds a
//!   character other than a space or tab. [`LinePolicy::CountBlank`] counts
//!   every line.
//! - **Exclusions**: excluded paths count zero and are never descended into.
//! - **Per-extension breakdown**: optional tally keyed by lowercase
//!   extension (`.py`, `.rs`, ...), with files without one left in a
//!   residual "misc" bucket.
//! - **Binary files** and special files count zero and are not errors.
//!
//! Diagnostics are emitted through `tracing`; the library prints nothing.
//!
//! ## Example
//!
//! ```rust
//! use loclib::{count_paths, CountOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("x.py"), "a = 1\nb = 2\n\nc = 3\n").unwrap();
//! fs::write(dir.path().join("y.txt"), "hello\nworld\n").unwrap();
//! fs::write(dir.path().join("Makefile"), "all:\n").unwrap();
//!
//! let options = CountOptions::new().by_extension(true);
//! let result = count_paths(&[dir.path()], options).unwrap();
//!
//! assert_eq!(result.total, 6);
//! let tally = result.by_extension.as_ref().unwrap();
//! assert_eq!(tally[".py"], 3);
//! assert_eq!(tally[".txt"], 2);
//! assert_eq!(result.misc(), 1);
//! ```

pub mod counter;
pub mod error;
pub mod extension;
pub mod lines;
pub mod options;
pub mod resolve;
pub mod stats;

pub use counter::{count_file, count_paths, Counter, Outcome, Skip};
pub use error::LocError;
pub use extension::extension_key;
pub use lines::{count_lines, count_str};
pub use options::{CountOptions, LinePolicy};
pub use resolve::{resolve, EntryKind, ResolvedPath};
pub use stats::CountResult;

/// Result type for loclib operations
pub type Result<T> = std::result::Result<T, LocError>;
