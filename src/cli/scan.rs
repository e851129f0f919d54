//! Scan command — security scan of the staged changes.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::analysis::{SecretsDetector, SuggestionsEngine};
use crate::data::{Severity, SuggestionReport};
use crate::git::GitRepository;

/// Parses a `--pattern name=regex` string into a `(name, regex)` tuple.
pub(crate) fn parse_pattern(s: &str) -> Result<(String, String)> {
    let (name, regex) = s
        .split_once('=')
        .filter(|(name, regex)| !name.trim().is_empty() && !regex.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Invalid --pattern format '{}'. Expected NAME=REGEX", s))?;
    Ok((name.trim().to_string(), regex.to_string()))
}

/// Scan command options.
#[derive(Parser)]
pub struct ScanCommand {
    /// Exits with an error when a high-severity issue is found.
    #[arg(long)]
    pub strict: bool,

    /// Extra high-severity secret pattern; may be repeated.
    #[arg(long, value_name = "NAME=REGEX")]
    pub pattern: Vec<String>,
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    #[serde(flatten)]
    report: &'a SuggestionReport,
    summary: Vec<String>,
}

impl ScanCommand {
    /// Prints the scan report; with `--strict`, fails on high severity.
    pub fn execute(self, repo: &GitRepository) -> Result<()> {
        let detector = self.build_detector()?;

        let files = repo.staged_files()?;
        let diff = repo.staged_diff()?;
        let report = SuggestionsEngine::with_detector(detector).analyze(&files, &diff);

        let output = ScanOutput {
            report: &report,
            summary: report.summary(),
        };
        let yaml_output = crate::data::to_yaml(&output)?;
        println!("{yaml_output}");

        if self.strict && report.has_high_severity {
            anyhow::bail!("High-severity security issues found in staged changes");
        }
        Ok(())
    }

    fn build_detector(&self) -> Result<SecretsDetector> {
        self.pattern
            .iter()
            .map(|raw| parse_pattern(raw))
            .try_fold(SecretsDetector::new(), |detector, parsed| {
                let (name, regex) = parsed?;
                detector
                    .with_pattern(&name, &regex, Severity::High)
                    .with_context(|| format!("Invalid --pattern '{name}'"))
            })
    }
}
