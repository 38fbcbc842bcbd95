//! Commit classification: bracket-tag taxonomy and the classified record.

pub mod category;
pub mod message;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use category::Category;
pub use message::classify_message;

/// Length of the abbreviated commit hash carried into changelog records.
const SHORT_HASH_LEN: usize = 7;

/// A commit with its bracket tags resolved to categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    pub hash: String,
    pub message: String,
    pub description: String,
    pub tags: Vec<Category>,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl ClassifiedCommit {
    /// Classify a raw commit into a changelog-ready record.
    ///
    /// The hash is abbreviated to seven characters; message classification
    /// never fails, so an untagged commit is still returned (callers decide
    /// whether to drop it).
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let hash: String = hash.into();
        let message: String = message.into();
        let (description, tags) = classify_message(&message);

        Self {
            hash: hash.chars().take(SHORT_HASH_LEN).collect(),
            message,
            description,
            tags,
            author: author.into(),
            timestamp,
        }
    }

    /// Whether the message carried at least one bracket tag.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}
