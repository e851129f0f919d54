//! Branch command — suggests branch names for staged changes.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::analysis::BranchNameSuggester;
use crate::git::GitRepository;

/// Branch command options.
#[derive(Parser)]
pub struct BranchCommand {}

#[derive(Serialize)]
struct BranchOutput {
    current_branch: Option<String>,
    suggestions: Vec<String>,
}

impl BranchCommand {
    /// Prints branch name candidates and the current branch.
    pub fn execute(self, repo: &GitRepository) -> Result<()> {
        let files = repo.staged_files()?;
        let diff = repo.staged_diff()?;

        let output = BranchOutput {
            // Unborn or detached HEAD has no branch name to report.
            current_branch: repo.get_current_branch().ok(),
            suggestions: BranchNameSuggester::suggest_many(&files, Some(&diff)),
        };

        let yaml_output = crate::data::to_yaml(&output)?;
        println!("{yaml_output}");
        Ok(())
    }
}
