//! Reviewer and pull-request draft data structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One commit by one author touching a file of interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// Author name.
    pub name: String,
    /// Author email.
    pub email: String,
    /// Author date.
    pub date: NaiveDate,
}

/// A ranked reviewer candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerSuggestion {
    /// Display name, the local part of the email.
    pub username: String,
    /// Contributor email, lowercased.
    pub email: String,
    /// Ranking score.
    pub score: u32,
    /// Number of commits touching the files.
    pub commits: u32,
    /// Most recent contribution.
    pub last_commit_date: NaiveDate,
}

/// Pull-request title and body derived from commit subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrDraft {
    /// Proposed title.
    pub title: String,
    /// Proposed markdown body.
    pub body: String,
}
