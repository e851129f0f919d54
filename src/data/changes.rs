//! Change classification data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category a changed file falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Source code.
    Code,
    /// Test files.
    Tests,
    /// Documentation.
    Docs,
    /// Configuration and dotfiles.
    Config,
}

impl FileCategory {
    /// Returns the lowercase token used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Tests => "tests",
            Self::Docs => "docs",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of changed files sharing a scope and category.
///
/// Groups are identified by `(scope, category)`; `label` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGroup {
    /// Human-readable category name (e.g. "Backend API").
    pub label: String,
    /// Short scope token (e.g. "api").
    pub scope: String,
    /// Files in classification order.
    pub files: Vec<String>,
    /// Category shared by every file in the group.
    pub category: FileCategory,
}

impl FileGroup {
    /// Returns the identity key of this group.
    pub fn key(&self) -> (&str, FileCategory) {
        (self.scope.as_str(), self.category)
    }
}

/// Result of classifying a changeset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Groups in first-seen order.
    pub groups: Vec<FileGroup>,
    /// Whether more than one group was produced.
    pub has_multiple_scopes: bool,
    /// Number of input files.
    pub total_files: usize,
    /// Advisory messages.
    pub suggestions: Vec<String>,
}

/// Conventional type used as a branch prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchType {
    /// New functionality.
    Feat,
    /// Bug fix.
    Fix,
    /// Documentation only.
    Docs,
    /// Code restructuring.
    Refactor,
    /// Tests only.
    Test,
    /// Configuration and maintenance.
    Chore,
}

impl BranchType {
    /// Returns the branch prefix token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
        }
    }

    /// Returns the description used when no file name is available.
    pub fn default_description(self) -> &'static str {
        match self {
            Self::Feat => "new-feature",
            Self::Fix => "bug-fix",
            Self::Docs => "update-docs",
            Self::Refactor => "refactoring",
            Self::Test => "add-tests",
            Self::Chore => "update-config",
        }
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
