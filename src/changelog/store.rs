//! Changelog file storage: plain read, atomic whole-file rewrite.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ChangelogError;

/// Read the changelog file, or `None` when it does not exist yet.
pub fn read_changelog(path: &Path) -> Result<Option<String>, ChangelogError> {
    if !path.exists() {
        return Ok(None);
    }

    std::fs::read_to_string(path)
        .map(Some)
        .map_err(ChangelogError::ReadFailed)
}

/// Replace the changelog file atomically.
///
/// The content is written to a temporary file in the same directory and then
/// renamed over the target, so a failed write leaves the previous document
/// untouched.
pub fn write_changelog(path: &Path, content: &str) -> Result<(), ChangelogError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(ChangelogError::WriteFailed)?;
    tmp.write_all(content.as_bytes())
        .map_err(ChangelogError::WriteFailed)?;
    tmp.persist(path)
        .map_err(|e| ChangelogError::WriteFailed(e.error))?;

    Ok(())
}
