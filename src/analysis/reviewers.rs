//! Reviewer ranking from file history.

use chrono::NaiveDate;
use tracing::debug;

use crate::data::{ContributionRecord, ReviewerSuggestion};

/// Default number of reviewers returned.
pub const DEFAULT_REVIEWER_LIMIT: usize = 5;

/// Points per commit touching the changed files.
const COMMIT_WEIGHT: u32 = 10;

/// Ranks contributors to the changed files as reviewer candidates.
///
/// Contributors are keyed by lowercased email; the current user is skipped.
/// Equal scores keep first-appearance order.
pub fn rank_reviewers(
    records: &[ContributionRecord],
    current_user_email: &str,
    today: NaiveDate,
    limit: usize,
) -> Vec<ReviewerSuggestion> {
    let current = current_user_email.to_lowercase();
    let mut tallies: Vec<(String, u32, NaiveDate)> = Vec::new();

    for record in records {
        if record.name.is_empty() || record.email.is_empty() {
            continue;
        }

        let email = record.email.to_lowercase();
        match tallies.iter_mut().find(|(e, _, _)| *e == email) {
            Some((_, commits, last)) => {
                *commits += 1;
                if record.date > *last {
                    *last = record.date;
                }
            }
            None => tallies.push((email, 1, record.date)),
        }
    }

    let mut suggestions: Vec<ReviewerSuggestion> = tallies
        .into_iter()
        .filter(|(email, _, _)| *email != current)
        .map(|(email, commits, last)| ReviewerSuggestion {
            username: email.split('@').next().unwrap_or_default().to_string(),
            score: commits * COMMIT_WEIGHT + recency_bonus(last, today),
            commits,
            last_commit_date: last,
            email,
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(limit);

    debug!(
        records = records.len(),
        reviewers = suggestions.len(),
        "Ranked reviewers"
    );
    suggestions
}

fn recency_bonus(last: NaiveDate, today: NaiveDate) -> u32 {
    match (today - last).num_days() {
        d if d < 7 => 50,
        d if d < 30 => 30,
        d if d < 90 => 10,
        _ => 0,
    }
}

/// Renders numbered reviewer lines.
pub fn format_reviewers(suggestions: &[ReviewerSuggestion]) -> Vec<String> {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let plural = if s.commits > 1 { "s" } else { "" };
            format!(
                "{}. {} ({} commit{plural}) - last: {}",
                i + 1,
                s.username,
                s.commits,
                s.last_commit_date.format("%Y-%m-%d")
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(email: &str, date: NaiveDate) -> ContributionRecord {
        ContributionRecord {
            name: email.split('@').next().unwrap().to_string(),
            email: email.to_string(),
            date,
        }
    }

    fn today() -> NaiveDate {
        day(2024, 6, 30)
    }

    #[test]
    fn scores_commits_and_recency() {
        let records = vec![
            record("alice@example.com", day(2024, 6, 28)),
            record("bob@example.com", day(2024, 1, 1)),
            record("bob@example.com", day(2024, 2, 1)),
            record("bob@example.com", day(2024, 3, 1)),
        ];
        let ranked = rank_reviewers(&records, "me@example.com", today(), 5);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].username, "alice");
        assert_eq!(ranked[0].score, 60);
        assert_eq!(ranked[1].username, "bob");
        assert_eq!(ranked[1].score, 30);
        assert_eq!(ranked[1].commits, 3);
        assert_eq!(ranked[1].last_commit_date, day(2024, 3, 1));
    }

    #[test]
    fn recency_bands() {
        assert_eq!(recency_bonus(day(2024, 6, 24), today()), 50);
        assert_eq!(recency_bonus(day(2024, 6, 23), today()), 30);
        assert_eq!(recency_bonus(day(2024, 6, 1), today()), 30);
        assert_eq!(recency_bonus(day(2024, 5, 31), today()), 10);
        assert_eq!(recency_bonus(day(2024, 4, 1), today()), 0);
    }

    #[test]
    fn emails_merge_case_insensitively_and_skip_current_user() {
        let records = vec![
            record("Carol@Example.com", day(2024, 6, 1)),
            record("carol@example.com", day(2024, 6, 2)),
            record("ME@example.com", day(2024, 6, 29)),
        ];
        let ranked = rank_reviewers(&records, "me@EXAMPLE.com", today(), 5);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].email, "carol@example.com");
        assert_eq!(ranked[0].commits, 2);
    }

    #[test]
    fn ties_keep_first_appearance_and_limit_applies() {
        let records: Vec<ContributionRecord> = ["d", "e", "f", "g", "h", "i"]
            .iter()
            .map(|u| record(&format!("{u}@x.io"), day(2023, 1, 1)))
            .collect();
        let ranked = rank_reviewers(&records, "", today(), DEFAULT_REVIEWER_LIMIT);

        let names: Vec<&str> = ranked.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["d", "e", "f", "g", "h"]);
    }

    #[test]
    fn records_without_identity_are_skipped() {
        let mut anonymous = record("x@y.z", today());
        anonymous.name.clear();
        assert!(rank_reviewers(&[anonymous], "", today(), 5).is_empty());
    }

    #[test]
    fn formatted_lines() {
        let records = vec![
            record("alice@example.com", day(2024, 6, 28)),
            record("bob@example.com", day(2024, 3, 1)),
            record("bob@example.com", day(2024, 3, 2)),
        ];
        let ranked = rank_reviewers(&records, "", today(), 5);
        insta::assert_snapshot!(format_reviewers(&ranked).join("\n"), @r"
        1. alice (1 commit) - last: 2024-06-28
        2. bob (2 commits) - last: 2024-03-02
        ");
    }
}
