//! tagnote - CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tagnote::changelog::{self, CHANGELOG_HEADER};
use tagnote::git;
use tagnote::manifest::Manifest;
use tagnote::version::{apply_bump, determine_bump, suggest_next_version, tag_counts, BumpType};

/// Maintain a badge-style changelog and suggest version bumps from
/// bracket-tagged commits.
#[derive(Parser, Debug)]
#[command(name = "tagnote")]
#[command(about = "Maintain a badge-style changelog from bracket-tagged commits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Update the changelog for the current manifest version
    Generate {
        /// Check whether the version section exists, without updating
        #[arg(short, long)]
        check: bool,

        /// Path to the version manifest (package.json or Cargo.toml)
        #[arg(short, long, default_value = "package.json")]
        manifest: PathBuf,

        /// Path to the changelog file
        #[arg(short = 'o', long, default_value = "CHANGELOG.md")]
        changelog: PathBuf,
    },
    /// Inspect or bump the manifest version
    Version {
        #[command(subcommand)]
        action: VersionAction,
    },
}

#[derive(Subcommand, Debug)]
enum VersionAction {
    /// Analyze commits since the last release and suggest a bump
    Analyze {
        #[arg(short, long, default_value = "package.json")]
        manifest: PathBuf,
    },
    /// Apply an explicit version increment
    Bump {
        #[arg(value_enum)]
        bump: BumpArg,

        #[arg(short, long, default_value = "package.json")]
        manifest: PathBuf,
    },
    /// Print the current manifest version
    Current {
        #[arg(short, long, default_value = "package.json")]
        manifest: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BumpArg {
    Major,
    Minor,
    Patch,
}

impl From<BumpArg> for BumpType {
    fn from(arg: BumpArg) -> Self {
        match arg {
            BumpArg::Major => BumpType::Major,
            BumpArg::Minor => BumpType::Minor,
            BumpArg::Patch => BumpType::Patch,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            check,
            manifest,
            changelog,
        } => generate(check, &manifest, &changelog),
        Command::Version { action } => {
            version_command(action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn generate(check: bool, manifest_path: &Path, changelog_path: &Path) -> Result<ExitCode> {
    let manifest = Manifest::open(manifest_path)?;
    let current = manifest
        .current_version()
        .context("Failed to read current version")?;

    println!("Current version: {current}");

    let doc = changelog::read_changelog(changelog_path)?
        .unwrap_or_else(|| CHANGELOG_HEADER.to_string());
    let section_exists = changelog::has_version_section(&doc, &current);

    if check {
        return Ok(if section_exists {
            println!("Version section for {current} exists");
            ExitCode::SUCCESS
        } else {
            println!("Version section for {current} is missing");
            ExitCode::FAILURE
        });
    }

    let repo = git::open_repository(Path::new("."))
        .context("Not a git repository. Run tagnote from within a git repository.")?;

    let commits = git::collect_commits_since(&repo, &current)
        .context("Failed to collect commits")?;

    if commits.is_empty() {
        println!("No tagged commits found since the last release. Nothing to add.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Found {} tagged commits", commits.len());

    let merged = changelog::merge(&doc, &current, &commits);
    changelog::write_changelog(changelog_path, &merged)
        .context("Failed to write changelog")?;

    println!("Changelog updated: {}", changelog_path.display());
    Ok(ExitCode::SUCCESS)
}

fn version_command(action: VersionAction) -> Result<()> {
    match action {
        VersionAction::Analyze { manifest } => analyze(&manifest),
        VersionAction::Bump { bump, manifest } => {
            let manifest = Manifest::open(&manifest)?;
            let current = manifest.current_version()?;
            let next = apply_bump(&current, bump.into());
            manifest.set_version(&next)?;
            println!("Version bumped to {next}");
            Ok(())
        }
        VersionAction::Current { manifest } => {
            let manifest = Manifest::open(&manifest)?;
            println!("{}", manifest.current_version()?);
            Ok(())
        }
    }
}

fn analyze(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::open(manifest_path)?;
    let current = manifest.current_version()?;

    let repo = git::open_repository(Path::new("."))
        .context("Not a git repository. Run tagnote from within a git repository.")?;
    let commits = git::collect_commits_since(&repo, &current)?;

    if commits.is_empty() {
        println!("No tagged commits found since the last release.");
        return Ok(());
    }

    println!("Commit analysis for version {current}:");
    for (label, count) in tag_counts(&commits) {
        let plural = if count == 1 { "" } else { "s" };
        println!("  {label}: {count} commit{plural}");
    }

    let suggested = suggest_next_version(&current, &commits);
    println!();
    println!("Current:   {current}");
    println!("Suggested: {suggested}");

    match determine_bump(&commits) {
        Some(bump) => println!("Type: {bump} bump"),
        None => println!("Type: no version bump needed"),
    }

    Ok(())
}
