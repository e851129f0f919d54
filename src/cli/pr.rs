//! PR command — drafts a pull-request title and body.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::data::PrDraft;
use crate::git::GitRepository;

/// PR command options.
#[derive(Parser)]
pub struct PrCommand {
    /// Base branch the pull request targets.
    #[arg(long, default_value = "main")]
    pub base: String,
}

impl PrCommand {
    /// Prints a draft built from the subjects in `base..HEAD`.
    pub fn execute(self, repo: &GitRepository) -> Result<()> {
        let subjects = repo.subjects_since(&self.base)?;
        debug!(base = %self.base, commits = subjects.len(), "Drafting pull request");

        let draft = PrDraft::from_subjects(&subjects);
        let yaml_output = crate::data::to_yaml(&draft)?;
        println!("{yaml_output}");
        Ok(())
    }
}
