//! Show-style command — prints the stored commit-style profile.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::data::StyleStore;
use crate::git::GitRepository;
use crate::utils::Settings;

/// Show-style command options.
#[derive(Parser)]
pub struct ShowStyleCommand {
    /// Profile directory (defaults to .git-agent/ in the work tree).
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

impl ShowStyleCommand {
    /// Prints the profile as JSON, or a notice when none was learned.
    pub fn execute(self, repo: &GitRepository) -> Result<()> {
        let settings = Settings::load()?;
        let workdir = repo.workdir().context("Repository has no work tree")?;
        let store = StyleStore::new(settings.agent_dir(self.dir.as_deref(), workdir));

        match store.load()? {
            Some(style) => println!("{}", crate::data::to_json(&style)?),
            None => println!(
                "No learned style at {}. Run `git-agent learn` first.",
                store.path().display()
            ),
        }
        Ok(())
    }
}
