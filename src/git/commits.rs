//! Commit collection since the previous release boundary.

use chrono::{TimeZone, Utc};
use git2::Repository;
use semver::Version;
use tracing::{debug, warn};

use crate::classify::ClassifiedCommit;
use crate::error::GitError;

use super::tags::find_previous_version_tag;

/// History depth walked when no prior version tag exists.
pub const FALLBACK_DEPTH: usize = 100;

/// Collect tagged commits between the previous release and HEAD.
///
/// The boundary is the highest semver tag older than `current`; without one,
/// the walk is capped at [`FALLBACK_DEPTH`] commits. Each commit is
/// classified and only commits carrying at least one bracket tag are
/// returned, oldest first. A commit with a non-UTF-8 message is skipped with
/// a warning rather than aborting the batch.
pub fn collect_commits_since(
    repo: &Repository,
    current: &Version,
) -> Result<Vec<ClassifiedCommit>, GitError> {
    let head_oid = match repo.head().ok().and_then(|head| head.target()) {
        Some(oid) => oid,
        None => {
            debug!("Repository has no HEAD commit yet");
            return Ok(Vec::new());
        }
    };

    let boundary = find_previous_version_tag(repo, current)?;

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(head_oid).map_err(GitError::RevwalkError)?;

    let limit = match &boundary {
        Some(tag) => {
            revwalk.hide(tag.oid).map_err(GitError::RevwalkError)?;
            debug!(tag = %tag.name, "Walking commits since previous release tag");
            usize::MAX
        }
        None => {
            debug!("No previous release tag; walking the last {FALLBACK_DEPTH} commits");
            FALLBACK_DEPTH
        }
    };

    let mut commits = Vec::new();

    for oid_result in revwalk.take(limit) {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;

        let Some(message) = commit.message() else {
            warn!("Skipping commit {} - message is not valid UTF-8", oid);
            continue;
        };

        let author = commit.author().name().unwrap_or("unknown").to_string();
        let timestamp = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .unwrap_or_else(Utc::now);

        let classified = ClassifiedCommit::new(oid.to_string(), message, author, timestamp);
        if classified.has_tags() {
            commits.push(classified);
        }
    }

    // Revwalk yields newest-first; the changelog wants chronological order.
    commits.reverse();
    Ok(commits)
}
