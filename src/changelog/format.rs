//! Badge-style changelog formatting.

use crate::classify::{Category, ClassifiedCommit};

/// Initial document for a changelog that does not exist yet: the badge
/// reference legend, the title block, and the separator before the first
/// version section.
pub const CHANGELOG_HEADER: &str = r#"[Improvement]: https://img.shields.io/badge/Improvement-green 'Improvement'
[Fix]: https://img.shields.io/badge/Fix-success 'Fix'
[WCAG]: https://img.shields.io/badge/WCAG-8A2BE2 'WCAG'
[Liveness]: https://img.shields.io/badge/Liveness-F7EC09 'Liveness'
[Feature]: https://img.shields.io/badge/Feature-blue 'Feature'
[Breaking]: https://img.shields.io/badge/Breaking-red 'Breaking'
[Security]: https://img.shields.io/badge/Security-orange 'Security'
[Performance]: https://img.shields.io/badge/Performance-yellow 'Performance'
[Docs]: https://img.shields.io/badge/Docs-lightgrey 'Docs'

# Change Log
All notable changes, such as SDK releases, updates and fixes, are documented in this file.

---

"#;

/// Inline badge marker for a category, referencing the legend definitions.
///
/// Ad-hoc (`Other`) categories have no registered badge.
pub fn badge_ref(category: &Category) -> Option<&'static str> {
    match category {
        Category::Improvement => Some("![Improvement]"),
        Category::Fix => Some("![Fix]"),
        Category::Wcag => Some("![WCAG]"),
        Category::Liveness => Some("![Liveness]"),
        Category::Feature => Some("![Feature]"),
        Category::Breaking => Some("![Breaking]"),
        Category::Security => Some("![Security]"),
        Category::Performance => Some("![Performance]"),
        Category::Docs => Some("![Docs]"),
        Category::Other(_) => None,
    }
}

/// Format commits as changelog bullet lines.
///
/// A line is emitted only when the commit has a non-empty description and at
/// least one of its tags resolves to a registered badge; commits whose tags
/// are entirely ad-hoc produce no line. Badge order follows tag order.
pub fn format_entries(commits: &[ClassifiedCommit]) -> Vec<String> {
    let mut entries = Vec::new();

    for commit in commits {
        if commit.description.is_empty() {
            continue;
        }

        let badges: Vec<&str> = commit.tags.iter().filter_map(badge_ref).collect();
        if badges.is_empty() {
            continue;
        }

        entries.push(format!("- {} {}", badges.join(" "), commit.description));
    }

    entries
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn commit(message: &str) -> ClassifiedCommit {
        ClassifiedCommit::new("abc1234", message, "Test User", Utc::now())
    }

    #[test]
    fn test_every_known_category_has_a_badge() {
        let known = [
            Category::Feature,
            Category::Improvement,
            Category::Fix,
            Category::Breaking,
            Category::Wcag,
            Category::Liveness,
            Category::Security,
            Category::Performance,
            Category::Docs,
        ];
        for category in &known {
            assert!(badge_ref(category).is_some(), "no badge for {category}");
        }
    }

    #[test]
    fn test_other_category_has_no_badge() {
        assert_eq!(badge_ref(&Category::Other("Telemetry".to_string())), None);
    }

    #[test]
    fn test_format_single_commit() {
        let entries = format_entries(&[commit("[Fix] Resolve authentication bug")]);
        assert_eq!(entries, vec!["- ![Fix] Resolve authentication bug"]);
    }

    #[test]
    fn test_badge_run_follows_tag_order() {
        let entries = format_entries(&[commit("[Improvement] [WCAG] Add keyboard navigation")]);
        assert_eq!(
            entries,
            vec!["- ![Improvement] ![WCAG] Add keyboard navigation"]
        );
    }

    #[test]
    fn test_unbadged_tags_are_omitted_from_run() {
        let entries = format_entries(&[commit("[fix] [telemetry] Track retry budget")]);
        assert_eq!(entries, vec!["- ![Fix] Track retry budget"]);
    }

    #[test]
    fn test_all_unbadged_commit_is_dropped() {
        let entries = format_entries(&[commit("[telemetry] Track retry budget")]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_untagged_and_empty_description_commits_are_dropped() {
        let entries = format_entries(&[commit("no tags here"), commit("[fix]")]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_header_defines_all_badges() {
        for label in [
            "Improvement",
            "Fix",
            "WCAG",
            "Liveness",
            "Feature",
            "Breaking",
            "Security",
            "Performance",
            "Docs",
        ] {
            assert!(CHANGELOG_HEADER.contains(&format!("[{label}]: https://img.shields.io/badge/")));
        }
        assert!(CHANGELOG_HEADER.contains("# Change Log"));
    }
}
