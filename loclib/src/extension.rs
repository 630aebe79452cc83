//! Extension buckets for the per-extension breakdown.

use std::path::Path;

/// Bucket key for `path`: its lowercased extension with the leading dot.
///
/// Only the final path component is considered. The key runs from the last
/// `.` of the file name to its end; a dot that starts the file name does not
/// delimit an extension, so `.bashrc` has none.
///
/// ```rust
/// use loclib::extension_key;
///
/// assert_eq!(extension_key("src/Main.PY").as_deref(), Some(".py"));
/// assert_eq!(extension_key("archive.tar.gz").as_deref(), Some(".gz"));
/// assert_eq!(extension_key("/home/me/.bashrc"), None);
/// assert_eq!(extension_key("v1.2/Makefile"), None);
/// ```
pub fn extension_key(path: impl AsRef<Path>) -> Option<String> {
    let name = path.as_ref().file_name()?.to_string_lossy();
    let dot = name.rfind('.').filter(|&i| i > 0)?;
    Some(name[dot..].to_lowercase())
}
