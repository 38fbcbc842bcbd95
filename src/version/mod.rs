//! Version suggestion and semver bumping.

pub mod bump;

pub use bump::{apply_bump, determine_bump, suggest_next_version, tag_counts, BumpType};
