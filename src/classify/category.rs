//! Category taxonomy for bracket-tagged commits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical changelog categories, plus an open-ended fallback.
///
/// Serializes to its display label (e.g. `"Feature"`). Parsing is total and
/// case-insensitive: known tokens map through the taxonomy, anything else
/// becomes `Other` carrying the token with its first letter capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Feature,
    Improvement,
    Fix,
    Breaking,
    Wcag,
    Liveness,
    Security,
    Performance,
    Docs,
    /// Ad-hoc category for tags outside the taxonomy.
    Other(String),
}

impl Category {
    /// Get the display label for the category.
    pub fn label(&self) -> &str {
        match self {
            Self::Feature => "Feature",
            Self::Improvement => "Improvement",
            Self::Fix => "Fix",
            Self::Breaking => "Breaking",
            Self::Wcag => "WCAG",
            Self::Liveness => "Liveness",
            Self::Security => "Security",
            Self::Performance => "Performance",
            Self::Docs => "Docs",
            Self::Other(label) => label,
        }
    }

    /// Map a raw bracket token to its category.
    ///
    /// Lookup is case-insensitive over the fixed taxonomy; unmapped tokens
    /// pass through as `Other` with the first letter capitalized.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        match token.to_lowercase().as_str() {
            "feat" | "feature" | "new" | "add" => Self::Feature,
            "improvement" | "improve" | "update" | "enhance" => Self::Improvement,
            "fix" | "bugfix" | "hotfix" | "patch" => Self::Fix,
            "breaking" | "major" => Self::Breaking,
            "wcag" | "accessibility" | "a11y" => Self::Wcag,
            "liveness" => Self::Liveness,
            "security" | "sec" => Self::Security,
            "perf" | "performance" => Self::Performance,
            "docs" | "doc" | "documentation" => Self::Docs,
            _ => Self::Other(capitalize_first(token)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from_token(&s))
    }
}

/// Capitalize only the first letter, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
