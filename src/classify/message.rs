//! Bracket-tag extraction from commit messages.

use regex_lite::Regex;

use super::category::Category;

/// Classify a raw commit message into a description and its category tags.
///
/// Every `[token]` occurrence in the message contributes a tag (deduplicated,
/// first-seen order), but only a contiguous run of bracket groups at the very
/// start of the message is stripped from the description. Malformed bracket
/// syntax never fails; it simply yields no tags.
pub fn classify_message(message: &str) -> (String, Vec<Category>) {
    let tag_pattern = Regex::new(r"\[([^\]]+)\]").unwrap();

    let mut tags: Vec<Category> = Vec::new();
    for caps in tag_pattern.captures_iter(message) {
        let Some(token) = caps.get(1) else { continue };
        let category = Category::from_token(token.as_str());
        if !tags.contains(&category) {
            tags.push(category);
        }
    }

    let description = if tags.is_empty() {
        message.trim().to_string()
    } else {
        strip_leading_tags(message)
    };

    (description, tags)
}

/// Remove the leading run of `[token]` groups (whitespace separated) and trim.
///
/// A bracket token appearing after free text stays in the description.
fn strip_leading_tags(message: &str) -> String {
    let leading_run = Regex::new(r"^\s*(?:\[[^\]]+\]\s*)+").unwrap();
    leading_run.replace(message, "").trim().to_string()
}
