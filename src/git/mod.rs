//! Git collaborator built on git2-rs.
//!
//! The classify/changelog/version core never touches git; this module is the
//! commit source that feeds it.

use std::path::Path;

use git2::Repository;

use crate::error::GitError;

pub mod commits;
pub mod tags;

pub use commits::{collect_commits_since, FALLBACK_DEPTH};
pub use tags::{find_previous_version_tag, get_all_tags, version_from_tag, TagInfo};

/// Open the repository containing `path`.
pub fn open_repository(path: &Path) -> Result<Repository, GitError> {
    Repository::discover(path).map_err(GitError::OpenRepository)
}
