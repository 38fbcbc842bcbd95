//! Changelog document model, formatting, and storage.

pub mod document;
pub mod format;
pub mod store;

pub use document::{has_version_section, merge};
pub use format::{badge_ref, format_entries, CHANGELOG_HEADER};
pub use store::{read_changelog, write_changelog};
