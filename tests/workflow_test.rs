//! End-to-end pipeline tests: repository -> classification -> merge -> store.

mod common;

use common::TestRepo;
use semver::Version;
use tagnote::changelog::{has_version_section, merge, read_changelog, write_changelog, CHANGELOG_HEADER};
use tagnote::git::collect_commits_since;
use tagnote::manifest::Manifest;

fn version(s: &str) -> Version {
    Version::parse(s).unwrap()
}

#[test]
fn test_first_release_seeds_and_fills_the_changelog() {
    let repo = TestRepo::new();
    let released = repo.commit("initial");
    repo.tag_lightweight("v1.0.0", released);
    repo.commit("[Fix] Resolve authentication bug");

    let manifest_path = repo.dir.path().join("package.json");
    std::fs::write(&manifest_path, r#"{ "name": "sdk", "version": "1.1.0" }"#).unwrap();
    let manifest = Manifest::open(&manifest_path).unwrap();
    let current = manifest.current_version().unwrap();

    let changelog_path = repo.dir.path().join("CHANGELOG.md");
    let doc = read_changelog(&changelog_path)
        .unwrap()
        .unwrap_or_else(|| CHANGELOG_HEADER.to_string());
    assert!(!has_version_section(&doc, &current));

    let commits = collect_commits_since(&repo.repo, &current).unwrap();
    let merged = merge(&doc, &current, &commits);
    write_changelog(&changelog_path, &merged).unwrap();

    let written = read_changelog(&changelog_path).unwrap().unwrap();
    assert!(written.contains("## SDK Version: __1.1.0__"));
    assert!(written.contains("- ![Fix] Resolve authentication bug"));
}

#[test]
fn test_second_run_appends_to_the_same_section() {
    let repo = TestRepo::new();
    let released = repo.commit("initial");
    repo.tag_lightweight("v1.0.0", released);
    repo.commit("[feat] Add product search");

    let changelog_path = repo.dir.path().join("CHANGELOG.md");
    let current = version("1.1.0");

    let commits = collect_commits_since(&repo.repo, &current).unwrap();
    let doc = merge(CHANGELOG_HEADER, &current, &commits);
    write_changelog(&changelog_path, &doc).unwrap();

    // A later commit lands inside the existing section
    repo.commit("[fix] Handle empty result page");
    let commits = collect_commits_since(&repo.repo, &current).unwrap();
    let doc = read_changelog(&changelog_path).unwrap().unwrap();
    let merged = merge(&doc, &current, &commits);
    write_changelog(&changelog_path, &merged).unwrap();

    let written = read_changelog(&changelog_path).unwrap().unwrap();
    assert_eq!(written.matches("## SDK Version: __1.1.0__").count(), 1);
    assert!(written.contains("- ![Fix] Handle empty result page"));
}

#[test]
fn test_suggested_version_can_be_bumped_into_the_manifest() {
    let repo = TestRepo::new();
    let released = repo.commit("initial");
    repo.tag_lightweight("v1.0.0", released);
    repo.commit("[improvement] Streamline checkout");

    let manifest_path = repo.dir.path().join("package.json");
    std::fs::write(&manifest_path, r#"{ "name": "sdk", "version": "1.0.0" }"#).unwrap();
    let manifest = Manifest::open(&manifest_path).unwrap();
    let current = manifest.current_version().unwrap();

    let commits = collect_commits_since(&repo.repo, &current).unwrap();
    let suggested = tagnote::version::suggest_next_version(&current, &commits);
    assert_eq!(suggested, version("1.1.0"));

    manifest.set_version(&suggested).unwrap();
    assert_eq!(manifest.current_version().unwrap(), version("1.1.0"));
}
