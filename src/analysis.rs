//! Change analysis: classification, security scans, naming and style learning.
//!
//! Every component here is a pure function over strings and paths; git and
//! filesystem access live in [`crate::git`] and [`crate::data::store`].

pub mod branch;
pub mod classifier;
pub mod error;
pub mod patterns;
pub mod pr;
pub mod reviewers;
pub mod secrets;
pub mod style;
pub mod suggestions;
pub mod todos;

pub use branch::BranchNameSuggester;
pub use classifier::ChangeClassifier;
pub use error::AnalysisError;
pub use reviewers::{format_reviewers, rank_reviewers, DEFAULT_REVIEWER_LIMIT};
pub use secrets::SecretsDetector;
pub use style::{CommitStyleLearner, SubjectAnalysis};
pub use suggestions::SuggestionsEngine;
pub use todos::TodosDetector;
