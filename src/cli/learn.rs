//! Learn command — learns the commit-message style from history.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::analysis::CommitStyleLearner;
use crate::data::StyleStore;
use crate::git::GitRepository;
use crate::utils::Settings;

/// Learn command options.
#[derive(Parser)]
pub struct LearnCommand {
    /// Number of recent commits to learn from (default: 100).
    #[arg(long)]
    pub commits: Option<usize>,

    /// Only learns from commits whose author name or email contains this.
    #[arg(long, value_name = "EMAIL")]
    pub author: Option<String>,

    /// Deletes the stored profile instead of learning.
    #[arg(long)]
    pub reset: bool,

    /// Profile directory (defaults to .git-agent/ in the work tree).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

impl LearnCommand {
    /// Learns and saves the profile, or deletes it with `--reset`.
    pub fn execute(self, repo: &GitRepository) -> Result<()> {
        let settings = Settings::load()?;
        let workdir = repo.workdir().context("Repository has no work tree")?;
        let store = StyleStore::new(settings.agent_dir(self.dir.as_deref(), workdir));

        if self.reset {
            if store.reset()? {
                println!("Removed learned style at {}", store.path().display());
            } else {
                println!("No learned style at {}", store.path().display());
            }
            return Ok(());
        }

        let limit = settings.learn_commits(self.commits)?;
        let subjects = repo.commit_subjects(limit, self.author.as_deref())?;
        debug!(limit, subjects = subjects.len(), "Learning commit style");

        let style = CommitStyleLearner::analyze(&subjects)
            .context("Failed to learn commit style")?;
        let path = store.save(&style)?;
        debug!(path = %path.display(), "Stored learned style");

        println!("{}", crate::data::to_json(&style)?);
        Ok(())
    }
}
