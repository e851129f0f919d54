//! Commit-style learning from historical subjects.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analysis::error::AnalysisError;
use crate::analysis::patterns::{
    CONVENTIONAL_HEADER, CONVENTIONAL_PREFIX, ENGLISH_MARKERS, FRENCH_MARKERS, HASH_TICKET_SOURCE,
    LEADING_EMOJI, LEADING_EMOJI_WITH_SPACE, PROJECT_KEY_TICKET_SOURCE, TICKET_PATTERNS,
};
use crate::data::{
    Capitalization, CommitFormat, Language, LearnedStyle, SubjectLanguage, Tense,
    MAX_SUBJECT_LENGTH,
};

/// Features extracted from one commit subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAnalysis {
    /// Language guessed from marker words.
    pub language: SubjectLanguage,
    /// Leading emoji, if any.
    pub emoji: Option<String>,
    /// Conventional type, lowercased.
    pub commit_type: Option<String>,
    /// Conventional scope.
    pub scope: Option<String>,
    /// Ticket reference text, without `#`.
    pub ticket_ref: Option<String>,
    /// Source of the ticket pattern that matched.
    pub ticket_pattern: Option<&'static str>,
    /// Capitalization of the first descriptive character.
    pub capitalization: Capitalization,
    /// Length in characters.
    pub length: usize,
}

/// Commit-style learner.
pub struct CommitStyleLearner;

impl CommitStyleLearner {
    /// Learns a style profile from commit subjects, newest first.
    pub fn analyze<S: AsRef<str>>(subjects: &[S]) -> Result<LearnedStyle, AnalysisError> {
        Self::analyze_at(subjects, Utc::now())
    }

    /// Learns a style profile stamped with the given time.
    pub fn analyze_at<S: AsRef<str>>(
        subjects: &[S],
        analyzed_at: DateTime<Utc>,
    ) -> Result<LearnedStyle, AnalysisError> {
        if subjects.is_empty() {
            return Err(AnalysisError::EmptyHistory);
        }

        let analyses: Vec<SubjectAnalysis> = subjects
            .iter()
            .map(|s| Self::analyze_subject(s.as_ref()))
            .collect();

        let style = aggregate(&analyses, analyzed_at);
        debug!(
            commits = style.analyzed_commits,
            language = ?style.language,
            format = ?style.format,
            "Learned commit style"
        );
        Ok(style)
    }

    /// Extracts the per-subject features.
    pub fn analyze_subject(subject: &str) -> SubjectAnalysis {
        let emoji = LEADING_EMOJI
            .find(subject)
            .map(|m| m.as_str().to_string());

        let without_emoji = LEADING_EMOJI_WITH_SPACE.replace(subject, "");
        let (commit_type, scope) = match CONVENTIONAL_HEADER.captures(&without_emoji) {
            Some(caps) => (
                caps.get(1).map(|m| m.as_str().to_lowercase()),
                caps.get(2).map(|m| m.as_str().to_string()),
            ),
            None => (None, None),
        };

        let (ticket_ref, ticket_pattern) = TICKET_PATTERNS
            .iter()
            .find_map(|pattern| {
                pattern.regex.captures(subject).map(|caps| {
                    let text = caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str());
                    (text.map(str::to_string), Some(pattern.source))
                })
            })
            .unwrap_or((None, None));

        let description = CONVENTIONAL_PREFIX.replace(&without_emoji, "");

        SubjectAnalysis {
            language: detect_language(subject),
            emoji,
            commit_type,
            scope,
            ticket_ref,
            ticket_pattern,
            capitalization: detect_capitalization(&description),
            length: subject.chars().count(),
        }
    }
}

fn detect_language(subject: &str) -> SubjectLanguage {
    let lower = subject.to_lowercase();
    let score = |markers: &[&str]| markers.iter().filter(|w| lower.contains(*w)).count();

    let fr = score(FRENCH_MARKERS);
    let en = score(ENGLISH_MARKERS);

    if fr > en && fr > 0 {
        SubjectLanguage::Fr
    } else if en > fr && en > 0 {
        SubjectLanguage::En
    } else {
        SubjectLanguage::Unknown
    }
}

fn detect_capitalization(description: &str) -> Capitalization {
    let Some(first) = description.chars().next() else {
        return Capitalization::Lowercase;
    };

    let upper: String = first.to_uppercase().collect();
    let lower: String = first.to_lowercase().collect();
    if upper != lower && upper == first.to_string() {
        Capitalization::Capitalize
    } else {
        Capitalization::Lowercase
    }
}

/// Returns whether `count` is strictly above `percent`% of `total`.
fn above(count: usize, total: usize, percent: usize) -> bool {
    count * 100 > total * percent
}

fn aggregate(analyses: &[SubjectAnalysis], analyzed_at: DateTime<Utc>) -> LearnedStyle {
    let total = analyses.len();
    let count = |f: fn(&SubjectAnalysis) -> bool| analyses.iter().filter(|&a| f(a)).count();

    let french = count(|a| a.language == SubjectLanguage::Fr);
    let english = count(|a| a.language == SubjectLanguage::En);
    let language = if above(french, total, 60) {
        Language::Fr
    } else if above(english, total, 60) {
        Language::En
    } else {
        Language::Mixed
    };

    let typed = count(|a| a.commit_type.is_some());
    let format = if above(typed, total, 50) {
        CommitFormat::Conventional
    } else {
        CommitFormat::Free
    };

    let use_emojis = above(count(|a| a.emoji.is_some()), total, 30);

    let mut emoji_map = BTreeMap::new();
    if use_emojis {
        for analysis in analyses {
            if let (Some(emoji), Some(commit_type)) = (&analysis.emoji, &analysis.commit_type) {
                emoji_map.insert(commit_type.clone(), emoji.clone());
            }
        }
    }

    let scopes: BTreeSet<String> = analyses.iter().filter_map(|a| a.scope.clone()).collect();

    let length_sum: usize = analyses.iter().map(|a| a.length).sum();
    let average_length = (length_sum * 2 + total) / (total * 2);
    let max_length = analyses
        .iter()
        .map(|a| a.length)
        .max()
        .unwrap_or(0)
        .min(MAX_SUBJECT_LENGTH);

    let capitalization = majority_capitalization(analyses);

    let uses_ticket_ref = above(count(|a| a.ticket_ref.is_some()), total, 20);
    let ticket_pattern = if uses_ticket_ref {
        preferred_ticket_pattern(analyses)
    } else {
        None
    };

    LearnedStyle {
        language,
        format,
        use_emojis,
        emoji_map,
        scopes,
        average_length,
        max_length,
        capitalization,
        uses_ticket_ref,
        ticket_pattern,
        tense: Tense::Imperative,
        analyzed_commits: total,
        analyzed_at,
    }
}

/// First class with the highest count, in [`Capitalization::ALL`] order.
fn majority_capitalization(analyses: &[SubjectAnalysis]) -> Capitalization {
    let mut best = Capitalization::ALL[0];
    let mut best_count = 0;

    for class in Capitalization::ALL {
        let n = analyses.iter().filter(|a| a.capitalization == class).count();
        if n > best_count {
            best = class;
            best_count = n;
        }
    }

    best
}

fn preferred_ticket_pattern(analyses: &[SubjectAnalysis]) -> Option<String> {
    let refs: Vec<&str> = analyses
        .iter()
        .filter_map(|a| a.ticket_ref.as_deref())
        .collect();

    let project_key = TICKET_PATTERNS
        .iter()
        .find(|p| p.source == PROJECT_KEY_TICKET_SOURCE)
        .map(|p| &p.regex);

    if refs
        .iter()
        .any(|r| project_key.is_some_and(|re| re.is_match(r)))
    {
        Some(PROJECT_KEY_TICKET_SOURCE.to_string())
    } else if refs
        .iter()
        .any(|r| !r.is_empty() && r.chars().all(|c| c.is_ascii_digit()))
    {
        Some(HASH_TICKET_SOURCE.to_string())
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn learn(subjects: &[&str]) -> LearnedStyle {
        CommitStyleLearner::analyze_at(subjects, at()).unwrap()
    }

    // ── per-subject features ───────────────────────────────────────

    #[test]
    fn conventional_subject() {
        let a = CommitStyleLearner::analyze_subject("feat(api): add users endpoint");
        assert_eq!(a.commit_type.as_deref(), Some("feat"));
        assert_eq!(a.scope.as_deref(), Some("api"));
        assert_eq!(a.emoji, None);
        assert_eq!(a.language, SubjectLanguage::En);
        assert_eq!(a.capitalization, Capitalization::Lowercase);
        assert_eq!(a.length, 29);
    }

    #[test]
    fn emoji_then_conventional_header() {
        let a = CommitStyleLearner::analyze_subject("✨ FEAT(ui): Nouvelle page");
        assert_eq!(a.emoji.as_deref(), Some("✨"));
        assert_eq!(a.commit_type.as_deref(), Some("feat"));
        assert_eq!(a.scope.as_deref(), Some("ui"));
        assert_eq!(a.capitalization, Capitalization::Capitalize);
    }

    #[test]
    fn emoji_with_variation_selector() {
        let a = CommitStyleLearner::analyze_subject("♻️ refactor: split parser");
        assert_eq!(a.emoji.as_deref(), Some("♻️"));
        assert_eq!(a.commit_type.as_deref(), Some("refactor"));
    }

    #[test]
    fn emoji_only_counts_at_start() {
        let a = CommitStyleLearner::analyze_subject("fix: crash 🐛");
        assert_eq!(a.emoji, None);
    }

    #[test]
    fn header_requires_space_after_colon() {
        let a = CommitStyleLearner::analyze_subject("fix:crash on start");
        assert_eq!(a.commit_type, None);
        assert_eq!(a.scope, None);
    }

    #[test]
    fn language_detection() {
        assert_eq!(
            CommitStyleLearner::analyze_subject("Ajoute la correction pour les dates").language,
            SubjectLanguage::Fr
        );
        assert_eq!(
            CommitStyleLearner::analyze_subject("Fixed the crash").language,
            SubjectLanguage::En
        );
        assert_eq!(
            CommitStyleLearner::analyze_subject("wip").language,
            SubjectLanguage::Unknown
        );
    }

    #[test]
    fn ticket_references() {
        let a = CommitStyleLearner::analyze_subject("PROJ-42 fix login");
        assert_eq!(a.ticket_ref.as_deref(), Some("PROJ-42"));
        assert_eq!(a.ticket_pattern, Some(PROJECT_KEY_TICKET_SOURCE));

        let b = CommitStyleLearner::analyze_subject("fix login (#17)");
        assert_eq!(b.ticket_ref.as_deref(), Some("17"));
        assert_eq!(b.ticket_pattern, Some(HASH_TICKET_SOURCE));

        let c = CommitStyleLearner::analyze_subject("fix login");
        assert_eq!(c.ticket_ref, None);
        assert_eq!(c.ticket_pattern, None);
    }

    #[test]
    fn capitalization_rules() {
        let cap = |s: &str| CommitStyleLearner::analyze_subject(s).capitalization;
        assert_eq!(cap("Update readme"), Capitalization::Capitalize);
        assert_eq!(cap("docs: Update readme"), Capitalization::Capitalize);
        assert_eq!(cap("update readme"), Capitalization::Lowercase);
        assert_eq!(cap("123 bump"), Capitalization::Lowercase);
        assert_eq!(cap("docs:"), Capitalization::Lowercase);
        assert_eq!(cap("Éclaircit le code"), Capitalization::Capitalize);
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(CommitStyleLearner::analyze_subject("café").length, 4);
    }

    // ── aggregation ────────────────────────────────────────────────

    #[test]
    fn empty_history_is_an_error() {
        let err = CommitStyleLearner::analyze::<&str>(&[]).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyHistory);
    }

    #[test]
    fn conventional_english_profile() {
        let style = learn(&[
            "feat(api): add users",
            "fix(api): fix the login",
            "docs: update the readme",
            "chore(deps): update deps",
        ]);
        assert_eq!(style.language, Language::En);
        assert_eq!(style.format, CommitFormat::Conventional);
        assert!(!style.use_emojis);
        assert!(style.emoji_map.is_empty());
        assert_eq!(
            style.scopes,
            BTreeSet::from(["api".to_string(), "deps".to_string()])
        );
        assert_eq!(style.capitalization, Capitalization::Lowercase);
        assert_eq!(style.tense, Tense::Imperative);
        assert_eq!(style.analyzed_commits, 4);
        assert_eq!(style.analyzed_at, at());
    }

    #[test]
    fn format_threshold_is_strict_majority() {
        let mut subjects = vec!["feat: add thing"; 7];
        subjects.extend(vec!["random words"; 3]);
        assert_eq!(learn(&subjects).format, CommitFormat::Conventional);

        let mut subjects = vec!["feat: add thing"; 5];
        subjects.extend(vec!["random words"; 5]);
        assert_eq!(learn(&subjects).format, CommitFormat::Free);

        let mut subjects = vec!["feat: add thing"; 1];
        subjects.extend(vec!["random words"; 9]);
        assert_eq!(learn(&subjects).format, CommitFormat::Free);
    }

    #[test]
    fn language_falls_back_to_mixed() {
        let style = learn(&[
            "ajoute la page",
            "corrige le bug",
            "add page",
            "fix bug",
            "wip",
        ]);
        assert_eq!(style.language, Language::Mixed);
    }

    #[test]
    fn emoji_map_is_last_write_wins() {
        let style = learn(&["✨ feat: one", "🚀 feat: two", "🐛 fix: three", "docs: four"]);
        assert!(style.use_emojis);
        assert_eq!(style.emoji_map.get("feat").map(String::as_str), Some("🚀"));
        assert_eq!(style.emoji_map.get("fix").map(String::as_str), Some("🐛"));
        assert!(!style.emoji_map.contains_key("docs"));
    }

    #[test]
    fn few_emojis_leave_map_empty() {
        let style = learn(&["✨ feat: one", "feat: two", "fix: three", "docs: four"]);
        assert!(!style.use_emojis);
        assert!(style.emoji_map.is_empty());
    }

    #[test]
    fn lengths_are_rounded_and_capped() {
        let long = "x".repeat(150);
        let style = learn(&["abc", "abcd", &long]);
        // (3 + 4 + 150) / 3 = 52.33
        assert_eq!(style.average_length, 52);
        assert_eq!(style.max_length, MAX_SUBJECT_LENGTH);

        let style = learn(&["ab", "abc"]);
        assert_eq!(style.average_length, 3);
        assert_eq!(style.max_length, 3);
    }

    #[test]
    fn capitalization_tie_prefers_lowercase() {
        let style = learn(&["Add one", "add two"]);
        assert_eq!(style.capitalization, Capitalization::Lowercase);

        let style = learn(&["Add one", "Add two", "add three"]);
        assert_eq!(style.capitalization, Capitalization::Capitalize);
    }

    #[test]
    fn project_key_ticket_pattern_preferred() {
        let style = learn(&["fix #12", "feat: ABC-7 login", "chore: tidy", "docs: typo"]);
        assert!(style.uses_ticket_ref);
        assert_eq!(style.ticket_pattern.as_deref(), Some(PROJECT_KEY_TICKET_SOURCE));
    }

    #[test]
    fn numeric_ticket_pattern() {
        let style = learn(&["fix crash (#12)", "add login #13", "tidy"]);
        assert!(style.uses_ticket_ref);
        assert_eq!(style.ticket_pattern.as_deref(), Some(HASH_TICKET_SOURCE));
    }

    #[test]
    fn rare_tickets_are_ignored() {
        let mut subjects = vec!["fix #12"];
        subjects.extend(vec!["tidy"; 4]);
        let style = learn(&subjects);
        assert!(!style.uses_ticket_ref);
        assert_eq!(style.ticket_pattern, None);
    }

    // ── properties ─────────────────────────────────────────────────

    proptest! {
        #[test]
        fn aggregate_invariants(subjects in prop::collection::vec(".{0,120}", 1..30)) {
            let style = CommitStyleLearner::analyze_at(&subjects, at()).unwrap();
            prop_assert_eq!(style.analyzed_commits, subjects.len());
            prop_assert!(style.max_length <= MAX_SUBJECT_LENGTH);
            prop_assert!(style.use_emojis || style.emoji_map.is_empty());
            prop_assert!(style.uses_ticket_ref || style.ticket_pattern.is_none());
            prop_assert_ne!(style.capitalization, Capitalization::Uppercase);
        }
    }
}
