//! Semver calculation from classified commits.

use std::collections::BTreeMap;

use semver::Version;

use crate::classify::{Category, ClassifiedCommit};

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggest the next version from the categories present across all commits.
///
/// Returns the current version unchanged when no commit carries a
/// release-relevant category (e.g. only Docs or ad-hoc tags).
pub fn suggest_next_version(current: &Version, commits: &[ClassifiedCommit]) -> Version {
    match determine_bump(commits) {
        Some(bump) => apply_bump(current, bump),
        None => current.clone(),
    }
}

/// Decide the bump from the set of categories, in strict priority order.
///
/// The result depends only on which categories are present, never on commit
/// order or counts.
pub fn determine_bump(commits: &[ClassifiedCommit]) -> Option<BumpType> {
    let has = |matches: fn(&Category) -> bool| {
        commits.iter().any(|c| c.tags.iter().any(matches))
    };

    if has(is_major_category) {
        Some(BumpType::Major)
    } else if has(is_minor_category) {
        Some(BumpType::Minor)
    } else if has(is_patch_category) {
        Some(BumpType::Patch)
    } else {
        None
    }
}

fn is_major_category(category: &Category) -> bool {
    match category {
        Category::Breaking => true,
        Category::Other(label) => label == "Major",
        _ => false,
    }
}

fn is_minor_category(category: &Category) -> bool {
    match category {
        Category::Feature | Category::Improvement => true,
        Category::Other(label) => label == "New",
        _ => false,
    }
}

fn is_patch_category(category: &Category) -> bool {
    matches!(
        category,
        Category::Fix | Category::Security | Category::Performance
    )
}

/// Apply a bump with standard semver resets: lower components go to zero,
/// any pre-release/build metadata is dropped.
pub fn apply_bump(current: &Version, bump: BumpType) -> Version {
    match bump {
        BumpType::Major => Version::new(current.major + 1, 0, 0),
        BumpType::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpType::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}

/// Count commits per category label, for the analyze report.
///
/// A commit tagged with two categories counts once under each. BTreeMap keeps
/// the output deterministic.
pub fn tag_counts(commits: &[ClassifiedCommit]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();

    for commit in commits {
        for tag in &commit.tags {
            *counts.entry(tag.label().to_string()).or_insert(0) += 1;
        }
    }

    counts
}
