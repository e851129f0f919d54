//! Reviewers command — ranks likely reviewers for staged files.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use crate::analysis::{format_reviewers, rank_reviewers, DEFAULT_REVIEWER_LIMIT};
use crate::data::ReviewerSuggestion;
use crate::git::{GitRepository, FILE_HISTORY_LIMIT};

/// Reviewers command options.
#[derive(Parser)]
pub struct ReviewersCommand {
    /// Maximum number of reviewers to suggest.
    #[arg(long, default_value_t = DEFAULT_REVIEWER_LIMIT)]
    pub limit: usize,
}

#[derive(Serialize)]
struct ReviewersOutput {
    reviewers: Vec<ReviewerSuggestion>,
    summary: Vec<String>,
}

impl ReviewersCommand {
    /// Prints ranked reviewers drawn from the history of the staged files.
    pub fn execute(self, repo: &GitRepository) -> Result<()> {
        let files = repo.staged_files()?;

        let mut records = Vec::new();
        for file in &files {
            records.extend(repo.file_contributors(file, FILE_HISTORY_LIMIT)?);
        }
        debug!(files = files.len(), records = records.len(), "Collected contributions");

        let current_user = repo.user_email()?.unwrap_or_default();
        let reviewers = rank_reviewers(
            &records,
            &current_user,
            Utc::now().date_naive(),
            self.limit,
        );

        let output = ReviewersOutput {
            summary: format_reviewers(&reviewers),
            reviewers,
        };
        let yaml_output = crate::data::to_yaml(&output)?;
        println!("{yaml_output}");
        Ok(())
    }
}
