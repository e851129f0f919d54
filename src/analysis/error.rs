//! Errors surfaced by the analysis components.

use thiserror::Error;

/// Input conditions the analysis components refuse to process.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The style learner was given no commit subjects.
    #[error("No commit subjects to learn from; at least one commit is required")]
    EmptyHistory,

    /// A caller-supplied detection pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Pattern source.
        pattern: String,
        /// Compiler message.
        reason: String,
    },
}
