//! Manifest (version file) reading and writing.
//!
//! Supports package.json and Cargo.toml. JSON manifests are rewritten
//! pretty-printed; TOML manifests are edited in place with their formatting
//! preserved.

use std::path::PathBuf;

use semver::Version;
use toml_edit::DocumentMut;

use crate::error::ManifestError;

/// The kind of manifest a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    PackageJson,
    CargoToml,
}

impl std::fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestKind::PackageJson => write!(f, "package.json"),
            ManifestKind::CargoToml => write!(f, "Cargo.toml"),
        }
    }
}

/// A project manifest holding the current semantic version.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    kind: ManifestKind,
}

impl Manifest {
    /// Bind a manifest path, detecting its kind from the file name.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let kind = match path.file_name().and_then(|name| name.to_str()) {
            Some("package.json") => ManifestKind::PackageJson,
            Some("Cargo.toml") => ManifestKind::CargoToml,
            _ => return Err(ManifestError::UnsupportedManifest(path)),
        };

        Ok(Self { path, kind })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn kind(&self) -> ManifestKind {
        self.kind
    }

    /// Read and validate the current version.
    ///
    /// A syntactically invalid version is a fatal configuration error; it is
    /// reported with the offending value and never partially rewritten.
    pub fn current_version(&self) -> Result<Version, ManifestError> {
        let raw = self.read_version_string()?;
        Version::parse(&raw).map_err(|source| ManifestError::InvalidVersion {
            path: self.path.clone(),
            value: raw,
            source,
        })
    }

    /// Persist a new version, preserving the rest of the manifest.
    pub fn set_version(&self, new_version: &Version) -> Result<(), ManifestError> {
        let content = self.read()?;

        let updated = match self.kind {
            ManifestKind::PackageJson => {
                let mut json: serde_json::Value =
                    serde_json::from_str(&content).map_err(|e| self.parse_failed(e))?;
                json["version"] = serde_json::Value::String(new_version.to_string());
                let mut output =
                    serde_json::to_string_pretty(&json).map_err(|e| self.parse_failed(e))?;
                output.push('\n');
                output
            }
            ManifestKind::CargoToml => {
                let mut doc: DocumentMut =
                    content.parse().map_err(|e| self.parse_failed(e))?;
                if doc.get("package").and_then(|p| p.get("version")).is_none() {
                    return Err(ManifestError::MissingVersion {
                        path: self.path.clone(),
                    });
                }
                doc["package"]["version"] = toml_edit::value(new_version.to_string());
                doc.to_string()
            }
        };

        std::fs::write(&self.path, updated).map_err(|source| ManifestError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    fn read(&self) -> Result<String, ManifestError> {
        std::fs::read_to_string(&self.path).map_err(|source| ManifestError::ReadFailed {
            path: self.path.clone(),
            source,
        })
    }

    fn read_version_string(&self) -> Result<String, ManifestError> {
        let content = self.read()?;

        let version = match self.kind {
            ManifestKind::PackageJson => {
                let json: serde_json::Value =
                    serde_json::from_str(&content).map_err(|e| self.parse_failed(e))?;
                json.get("version")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            }
            ManifestKind::CargoToml => {
                let doc: DocumentMut = content.parse().map_err(|e| self.parse_failed(e))?;
                doc.get("package")
                    .and_then(|p| p.get("version"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            }
        };

        version.ok_or_else(|| ManifestError::MissingVersion {
            path: self.path.clone(),
        })
    }

    fn parse_failed(&self, err: impl std::fmt::Display) -> ManifestError {
        ManifestError::ParseFailed {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}
