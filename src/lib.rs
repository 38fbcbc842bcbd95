//! tagnote - maintains a badge-style changelog and suggests version bumps
//! from bracket-tagged commits.
//!
//! # Overview
//!
//! tagnote classifies commit messages by their leading `[Tag]` markers,
//! merges the classified entries into a badge-style changelog document (new
//! version section or append to an existing one), and suggests semantic
//! version increments from the same classification. The classify, changelog,
//! and version modules are pure over their inputs; git access, manifest
//! files, and the changelog file live in collaborator modules.

pub mod changelog;
pub mod classify;
pub mod error;
pub mod git;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use changelog::{has_version_section, merge, CHANGELOG_HEADER};
pub use classify::{classify_message, Category, ClassifiedCommit};
pub use error::{ChangelogError, GitError, ManifestError};
pub use manifest::{Manifest, ManifestKind};
pub use version::{suggest_next_version, BumpType};
