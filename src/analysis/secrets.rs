//! Sensitive-file and hardcoded-secret detection.

use regex::Regex;
use tracing::debug;

use crate::analysis::error::AnalysisError;
use crate::analysis::patterns::{
    SecretRule, SECRET_PATTERNS, SECRET_PATTERN_SUGGESTION, SENSITIVE_FILES,
    SENSITIVE_FILE_SUGGESTION,
};
use crate::data::{SecretDetection, SecretKind, Severity};
use crate::git::diff::DiffLines;

/// Scans file names and added diff lines for credentials.
///
/// The built-in rules always apply; [`SecretsDetector::with_pattern`] adds
/// extra secret-literal rules after them.
#[derive(Debug, Default)]
pub struct SecretsDetector {
    extra: Vec<SecretRule>,
}

impl SecretsDetector {
    /// Creates a detector with the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret-literal rule compiled from `source`.
    pub fn with_pattern(
        mut self,
        name: &str,
        source: &str,
        severity: Severity,
    ) -> Result<Self, AnalysisError> {
        let regex = Regex::new(source).map_err(|e| AnalysisError::InvalidPattern {
            pattern: source.to_string(),
            reason: e.to_string(),
        })?;

        self.extra.push(SecretRule {
            name: name.to_string(),
            severity,
            regex,
        });
        Ok(self)
    }

    /// Runs both scans: file names first, then the diff.
    pub fn detect<S: AsRef<str>>(&self, files: &[S], diff: &str) -> Vec<SecretDetection> {
        let mut detections = self.scan_files(files);
        detections.extend(self.scan_diff(diff));

        debug!(
            files = files.len(),
            detections = detections.len(),
            "Secret scan complete"
        );
        detections
    }

    /// Flags files whose names suggest credentials; first matching rule wins.
    pub fn scan_files<S: AsRef<str>>(&self, files: &[S]) -> Vec<SecretDetection> {
        files
            .iter()
            .filter_map(|file| {
                let file = file.as_ref();
                SENSITIVE_FILES
                    .iter()
                    .find(|rule| rule.regex.is_match(file))
                    .map(|rule| SecretDetection {
                        kind: SecretKind::SensitiveFile,
                        severity: Severity::High,
                        file: file.to_string(),
                        message: format!("Sensitive file detected: {}", rule.name),
                        suggestion: SENSITIVE_FILE_SUGGESTION.to_string(),
                    })
            })
            .collect()
    }

    /// Flags secret-like literals on added lines.
    ///
    /// Rules are tested independently, so one line may yield several
    /// detections.
    pub fn scan_diff(&self, diff: &str) -> Vec<SecretDetection> {
        let lines = DiffLines::new(diff);
        let mut detections = Vec::new();

        for (index, content) in lines.added() {
            for rule in SECRET_PATTERNS.iter().chain(self.extra.iter()) {
                if rule.regex.is_match(content) {
                    detections.push(SecretDetection {
                        kind: SecretKind::SecretPattern,
                        severity: rule.severity,
                        file: lines.file_for(index).to_string(),
                        message: format!("Potential {} found in code", rule.name),
                        suggestion: SECRET_PATTERN_SUGGESTION.to_string(),
                    });
                }
            }
        }

        detections
    }
}
