//! Version-section detection and append-only merging.

use semver::Version;

use crate::classify::ClassifiedCommit;

use super::format::format_entries;

/// Check whether a line is a version heading for exactly this version.
///
/// Tolerates the plain form (`## 1.2.3`), the underlined form
/// (`## __1.2.3__`), and the optional `SDK Version:` label, case-insensitive.
/// The version must span the rest of the line, so `1.0.0` matches neither
/// `1.0.0-beta` nor `10.0.0`.
fn is_version_heading(line: &str, version: &Version) -> bool {
    let Some(rest) = line.strip_prefix("## ") else {
        return false;
    };
    let mut rest = rest.trim();

    const LABEL: &str = "sdk version:";
    if let Some(prefix) = rest.get(..LABEL.len()) {
        if prefix.eq_ignore_ascii_case(LABEL) {
            rest = rest[LABEL.len()..].trim_start();
        }
    }

    let rest = rest.strip_prefix("__").unwrap_or(rest);
    let rest = rest.strip_suffix("__").unwrap_or(rest);

    rest == version.to_string()
}

/// True iff the document already has a section for this version.
pub fn has_version_section(doc: &str, version: &Version) -> bool {
    doc.lines().any(|line| is_version_heading(line, version))
}

/// Merge formatted commit entries into the changelog document.
///
/// Appends inside the existing section for `version` when one exists,
/// otherwise splices a new section in right after the title/legend block.
/// Existing lines are never reordered or rewritten. There is no cross-run
/// de-duplication: merging the same commit set twice duplicates entries.
pub fn merge(doc: &str, version: &Version, commits: &[ClassifiedCommit]) -> String {
    let entries = format_entries(commits);

    // Split on '\n' rather than lines() so a trailing newline survives the
    // round-trip as an empty final element.
    let mut lines: Vec<String> = doc.split('\n').map(str::to_string).collect();

    if has_version_section(doc, version) {
        append_to_existing(&mut lines, version, &entries);
    } else {
        insert_new_section(&mut lines, version, &entries);
    }

    lines.join("\n")
}

/// Insert entries inside an existing section, immediately before the next
/// `## ` heading (or end-of-document), preceded by one blank line.
fn append_to_existing(lines: &mut Vec<String>, version: &Version, entries: &[String]) {
    let Some(heading_idx) = lines.iter().position(|l| is_version_heading(l, version)) else {
        return;
    };

    let mut insert_idx = heading_idx + 1;
    while insert_idx < lines.len() && !lines[insert_idx].starts_with("## ") {
        insert_idx += 1;
    }

    let mut block = Vec::with_capacity(entries.len() + 1);
    block.push(String::new());
    block.extend(entries.iter().cloned());

    lines.splice(insert_idx..insert_idx, block);
}

/// Synthesize a new version section and splice it in after the first `---`
/// that follows the title line.
///
/// Always inserting at this fixed anchor keeps sections in
/// reverse-chronological order without a sort step. A document with no
/// title/legend block degrades to insertion at position 0.
fn insert_new_section(lines: &mut Vec<String>, version: &Version, entries: &[String]) {
    let mut insert_idx = 0;
    let mut found_title = false;

    for (i, line) in lines.iter().enumerate() {
        if line == "---" && found_title {
            insert_idx = i + 1;
            break;
        }
        if line.starts_with("# Change Log") || line.starts_with("# Changelog") {
            found_title = true;
        }
    }

    let mut section = vec![
        String::new(),
        format!("## SDK Version: __{version}__"),
        String::new(),
    ];
    section.extend(entries.iter().cloned());
    section.push(String::new());
    section.push("---".to_string());

    lines.splice(insert_idx..insert_idx, section);
}
