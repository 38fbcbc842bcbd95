//! Tag enumeration and previous-release resolution.

use git2::Repository;
use semver::Version;
use tracing::{debug, warn};

use crate::error::GitError;

/// A git tag with optional semver version.
#[derive(Debug, Clone)]
pub struct TagInfo {
    pub name: String,
    pub oid: git2::Oid,
    pub version: Option<Version>,
}

/// Get all tags from the repository.
///
/// Annotated tags are resolved to their target commits; tags with non-UTF-8
/// names are skipped with a warning.
pub fn get_all_tags(repo: &Repository) -> Result<Vec<TagInfo>, GitError> {
    let mut tags = Vec::new();

    repo.tag_foreach(|oid, name_bytes| {
        if let Ok(name_str) = std::str::from_utf8(name_bytes) {
            let name = name_str
                .strip_prefix("refs/tags/")
                .unwrap_or(name_str)
                .to_string();

            let version = version_from_tag(&name);

            let resolved_oid = match repo.find_tag(oid) {
                Ok(tag_obj) => tag_obj.target_id(),
                Err(_) => oid, // lightweight tag
            };

            tags.push(TagInfo {
                name,
                oid: resolved_oid,
                version,
            });
        } else {
            warn!("Skipping tag with OID {} - name is not valid UTF-8", oid);
        }
        true // Continue iteration
    })
    .map_err(GitError::TagLookup)?;

    Ok(tags)
}

/// Find the release boundary for `current`: the highest semver tag strictly
/// older than the current manifest version.
///
/// Returns `None` when no prior version tag exists; the caller falls back to
/// a fixed history depth.
pub fn find_previous_version_tag(
    repo: &Repository,
    current: &Version,
) -> Result<Option<TagInfo>, GitError> {
    let previous = get_all_tags(repo)?
        .into_iter()
        .filter(|tag| tag.version.as_ref().is_some_and(|v| v < current))
        .max_by(|a, b| a.version.cmp(&b.version));

    match &previous {
        Some(tag) => debug!(tag = %tag.name, "Found previous release tag"),
        None => debug!("No release tag older than {current}"),
    }

    Ok(previous)
}

/// Extract a semver version from a tag name.
/// Handles both "v1.2.3" and "1.2.3" formats.
pub fn version_from_tag(tag_name: &str) -> Option<Version> {
    let version_str = tag_name.strip_prefix('v').unwrap_or(tag_name);
    Version::parse(version_str).ok()
}
