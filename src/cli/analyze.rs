//! Analyze command — classifies staged files.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::analysis::ChangeClassifier;
use crate::git::GitRepository;

/// Analyze command options.
#[derive(Parser)]
pub struct AnalyzeCommand {}

impl AnalyzeCommand {
    /// Prints the classification of the staged files as YAML.
    pub fn execute(self, repo: &GitRepository) -> Result<()> {
        let files = repo.staged_files()?;
        debug!(files = files.len(), "Classifying staged files");

        let result = ChangeClassifier::classify(&files);
        let yaml_output = crate::data::to_yaml(&result)?;
        println!("{yaml_output}");
        Ok(())
    }
}
