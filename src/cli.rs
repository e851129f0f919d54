//! CLI interface for git-agent.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::git::GitRepository;

mod analyze;
mod branch;
mod learn;
mod pr;
mod reviewers;
mod scan;
mod show_style;

pub use analyze::AnalyzeCommand;
pub use branch::BranchCommand;
pub use learn::LearnCommand;
pub use pr::PrCommand;
pub use reviewers::ReviewersCommand;
pub use scan::ScanCommand;
pub use show_style::ShowStyleCommand;

/// git-agent: change analysis and commit-style tooling for Git.
#[derive(Parser)]
#[command(name = "git-agent")]
#[command(about = "Classifies, scans and names staged changes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Repository to operate on (defaults to the current directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Classifies staged files into groups.
    Analyze(AnalyzeCommand),
    /// Scans staged changes for secrets and TODO comments.
    Scan(ScanCommand),
    /// Suggests branch names for the staged changes.
    Branch(BranchCommand),
    /// Learns the commit-message style from history.
    Learn(LearnCommand),
    /// Shows the stored commit-style profile.
    #[command(name = "show-style")]
    ShowStyle(ShowStyleCommand),
    /// Suggests reviewers from the history of the staged files.
    Reviewers(ReviewersCommand),
    /// Drafts a pull-request title and body.
    Pr(PrCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        let repo = open_repository(self.repo.as_deref())?;

        match self.command {
            Commands::Analyze(cmd) => cmd.execute(&repo),
            Commands::Scan(cmd) => cmd.execute(&repo),
            Commands::Branch(cmd) => cmd.execute(&repo),
            Commands::Learn(cmd) => cmd.execute(&repo),
            Commands::ShowStyle(cmd) => cmd.execute(&repo),
            Commands::Reviewers(cmd) => cmd.execute(&repo),
            Commands::Pr(cmd) => cmd.execute(&repo),
        }
    }
}

fn open_repository(path: Option<&std::path::Path>) -> Result<GitRepository> {
    match path {
        Some(path) => GitRepository::open_at(path),
        None => GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository."),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn repo_flag_is_global() {
        let cli = Cli::try_parse_from(["git-agent", "scan", "--repo", "/tmp/x", "--strict"]).unwrap();
        assert_eq!(cli.repo, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Commands::Scan(ref s) if s.strict));
    }

    #[test]
    fn show_style_is_kebab_case() {
        let cli = Cli::try_parse_from(["git-agent", "show-style"]).unwrap();
        assert!(matches!(cli.command, Commands::ShowStyle(_)));
    }

    #[test]
    fn learn_flags_parse() {
        let cli = Cli::try_parse_from([
            "git-agent",
            "learn",
            "--commits",
            "20",
            "--author",
            "ada@example.com",
        ])
        .unwrap();
        let Commands::Learn(learn) = cli.command else {
            panic!("expected learn");
        };
        assert_eq!(learn.commits, Some(20));
        assert_eq!(learn.author.as_deref(), Some("ada@example.com"));
        assert!(!learn.reset);
    }

    #[test]
    fn reviewers_limit_defaults_to_five() {
        let cli = Cli::try_parse_from(["git-agent", "reviewers"]).unwrap();
        let Commands::Reviewers(reviewers) = cli.command else {
            panic!("expected reviewers");
        };
        assert_eq!(reviewers.limit, 5);
    }

    #[test]
    fn pr_base_defaults_to_main() {
        let cli = Cli::try_parse_from(["git-agent", "pr"]).unwrap();
        let Commands::Pr(pr) = cli.command else {
            panic!("expected pr");
        };
        assert_eq!(pr.base, "main");
    }
}
