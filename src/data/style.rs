//! Learned commit-style profile.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dominant language of commit subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French.
    Fr,
    /// English.
    En,
    /// No language above the majority threshold.
    Mixed,
}

/// Language detected for a single subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectLanguage {
    /// More French markers than English.
    Fr,
    /// More English markers than French.
    En,
    /// Tie or no markers.
    Unknown,
}

/// Overall subject format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitFormat {
    /// `type(scope): description`.
    Conventional,
    /// Anything else.
    Free,
}

/// Capitalization of the first descriptive character.
///
/// `Uppercase` is part of the profile schema but subject extraction never
/// yields it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capitalization {
    /// Starts lowercase (or with a caseless character).
    Lowercase,
    /// Fully uppercase.
    Uppercase,
    /// Starts with a capital letter.
    Capitalize,
}

impl Capitalization {
    /// Classes in tie-break order.
    pub const ALL: [Self; 3] = [Self::Lowercase, Self::Uppercase, Self::Capitalize];
}

/// Grammatical tense of subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// "add", "fix".
    Imperative,
    /// "added", "fixed".
    Past,
    /// "adds", "fixes".
    Present,
}

/// Aggregate commit-style profile, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnedStyle {
    /// Dominant subject language.
    pub language: Language,
    /// Dominant subject format.
    pub format: CommitFormat,
    /// Whether subjects usually start with an emoji.
    pub use_emojis: bool,
    /// Commit type to emoji, last observation wins.
    pub emoji_map: BTreeMap<String, String>,
    /// Distinct conventional scopes observed.
    pub scopes: BTreeSet<String>,
    /// Rounded mean subject length.
    pub average_length: usize,
    /// Longest subject, capped at [`MAX_SUBJECT_LENGTH`].
    pub max_length: usize,
    /// Majority capitalization.
    pub capitalization: Capitalization,
    /// Whether subjects usually carry a ticket reference.
    pub uses_ticket_ref: bool,
    /// Regex source of the preferred ticket reference form.
    pub ticket_pattern: Option<String>,
    /// Subject tense.
    pub tense: Tense,
    /// Number of subjects analyzed.
    pub analyzed_commits: usize,
    /// When the profile was learned.
    pub analyzed_at: DateTime<Utc>,
}

/// Upper bound recorded for `max_length`.
pub const MAX_SUBJECT_LENGTH: usize = 100;

impl LearnedStyle {
    /// Returns the emoji to use for a commit type.
    ///
    /// Learned associations take precedence over the built-in table; `None`
    /// when the profile does not use emojis.
    pub fn emoji_for(&self, commit_type: &str) -> Option<&str> {
        if !self.use_emojis {
            return None;
        }

        self.emoji_map
            .get(commit_type)
            .map(String::as_str)
            .or_else(|| crate::analysis::patterns::default_emoji_for_type(commit_type))
    }
}
