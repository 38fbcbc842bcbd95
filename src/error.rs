//! Error types for tagnote modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to enumerate tags: {0}")]
    TagLookup(#[source] git2::Error),
}

/// Errors from changelog document storage.
///
/// The merge logic itself is pure over strings and cannot fail; only the
/// surrounding read/write can.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors from manifest (version file) operations.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    #[error("Manifest {path} has no version field")]
    MissingVersion { path: PathBuf },

    #[error("Manifest {path} has invalid version '{value}': {source}")]
    InvalidVersion {
        path: PathBuf,
        value: String,
        #[source]
        source: semver::Error,
    },

    #[error("Unsupported manifest file: {0} (expected package.json or Cargo.toml)")]
    UnsupportedManifest(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_display() {
        let err = ManifestError::MissingVersion {
            path: PathBuf::from("package.json"),
        };
        assert_eq!(err.to_string(), "Manifest package.json has no version field");
    }

    #[test]
    fn test_invalid_version_carries_value() {
        let source = semver::Version::parse("not-a-version").unwrap_err();
        let err = ManifestError::InvalidVersion {
            path: PathBuf::from("Cargo.toml"),
            value: "not-a-version".to_string(),
            source,
        };
        assert!(err.to_string().contains("not-a-version"));
    }

    #[test]
    fn test_unsupported_manifest_names_expectations() {
        let err = ManifestError::UnsupportedManifest(PathBuf::from("setup.py"));
        assert!(err.to_string().contains("package.json or Cargo.toml"));
    }
}
