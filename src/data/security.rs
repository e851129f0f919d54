//! Security and TODO scan data structures.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity attached to a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be reviewed before committing.
    High,
    /// Worth a second look.
    Medium,
    /// Informational.
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Kind of secret detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretKind {
    /// A file whose name suggests it holds credentials.
    SensitiveFile,
    /// A secret-like literal on an added diff line.
    SecretPattern,
}

/// A potential credential leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretDetection {
    /// What triggered the detection.
    pub kind: SecretKind,
    /// How serious the finding is.
    pub severity: Severity,
    /// File the finding belongs to.
    pub file: String,
    /// Description naming the matched rule.
    pub message: String,
    /// Remediation advice.
    pub suggestion: String,
}

/// Marker word of a TODO-style comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TodoMarker {
    /// `TODO`
    Todo,
    /// `FIXME`
    Fixme,
    /// `HACK`
    Hack,
    /// `XXX`
    Xxx,
}

impl TodoMarker {
    /// All markers in scan order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::Fixme, Self::Hack, Self::Xxx];

    /// Returns the marker word as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Fixme => "FIXME",
            Self::Hack => "HACK",
            Self::Xxx => "XXX",
        }
    }
}

impl fmt::Display for TodoMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A TODO-style comment introduced by a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDetection {
    /// Marker that matched.
    pub marker: TodoMarker,
    /// File the comment was added to.
    pub file: String,
    /// The added line, trimmed.
    pub raw_line: String,
    /// Text following the marker.
    pub message: String,
}

/// Per-severity counts over secret detections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveritySummary {
    /// High-severity detections.
    pub high: usize,
    /// Medium-severity detections.
    pub medium: usize,
    /// Low-severity detections.
    pub low: usize,
}

impl SeveritySummary {
    /// Counts detections by severity.
    pub fn from_detections(detections: &[SecretDetection]) -> Self {
        detections
            .iter()
            .fold(Self::default(), |mut summary, detection| {
                match detection.severity {
                    Severity::High => summary.high += 1,
                    Severity::Medium => summary.medium += 1,
                    Severity::Low => summary.low += 1,
                }
                summary
            })
    }
}

/// Combined output of the security scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionReport {
    /// Secret and sensitive-file detections.
    pub secrets: Vec<SecretDetection>,
    /// TODO-style comments added by the diff.
    pub todos: Vec<TodoDetection>,
    /// Any detection with high severity.
    pub has_high_severity: bool,
    /// Any detection with medium severity.
    pub has_medium_severity: bool,
    /// `secrets.len() + todos.len()`.
    pub total_issues: usize,
}

impl SuggestionReport {
    /// Builds a report and derives its aggregate flags.
    pub fn new(secrets: Vec<SecretDetection>, todos: Vec<TodoDetection>) -> Self {
        let has_high_severity = secrets.iter().any(|s| s.severity == Severity::High);
        let has_medium_severity = secrets.iter().any(|s| s.severity == Severity::Medium);
        let total_issues = secrets.len() + todos.len();

        Self {
            secrets,
            todos,
            has_high_severity,
            has_medium_severity,
            total_issues,
        }
    }

    /// Returns human-readable summary lines, omitting zero counts.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let counts = SeveritySummary::from_detections(&self.secrets);
        if counts.high > 0 {
            lines.push(format!(
                "{} high-severity security issue(s) detected",
                counts.high
            ));
        }
        if counts.medium > 0 {
            lines.push(format!(
                "{} medium-severity security issue(s) detected",
                counts.medium
            ));
        }

        if !self.todos.is_empty() {
            let total: usize = count_by_marker(&self.todos).values().sum();
            lines.push(format!("{total} TODO/FIXME comment(s) added"));
        }

        lines
    }
}

/// Groups TODO detections by file, keeping first-seen file order.
pub fn group_by_file(detections: &[TodoDetection]) -> Vec<(String, Vec<TodoDetection>)> {
    let mut grouped: Vec<(String, Vec<TodoDetection>)> = Vec::new();

    for detection in detections {
        match grouped.iter_mut().find(|(file, _)| *file == detection.file) {
            Some((_, entries)) => entries.push(detection.clone()),
            None => grouped.push((detection.file.clone(), vec![detection.clone()])),
        }
    }

    grouped
}

/// Counts TODO detections per marker; every marker is present.
pub fn count_by_marker(detections: &[TodoDetection]) -> BTreeMap<TodoMarker, usize> {
    let mut counts: BTreeMap<TodoMarker, usize> =
        TodoMarker::ALL.iter().map(|m| (*m, 0)).collect();

    for detection in detections {
        *counts.entry(detection.marker).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(severity: Severity) -> SecretDetection {
        SecretDetection {
            kind: SecretKind::SecretPattern,
            severity,
            file: "src/app.ts".to_string(),
            message: "Potential API Key found in code".to_string(),
            suggestion: String::new(),
        }
    }

    fn todo(marker: TodoMarker, file: &str) -> TodoDetection {
        TodoDetection {
            marker,
            file: file.to_string(),
            raw_line: format!("// {marker}: something"),
            message: "something".to_string(),
        }
    }

    // ── SuggestionReport ───────────────────────────────────────────

    #[test]
    fn report_flags_and_total() {
        let report = SuggestionReport::new(
            vec![secret(Severity::Medium)],
            vec![todo(TodoMarker::Todo, "a.ts"), todo(TodoMarker::Hack, "a.ts")],
        );
        assert!(!report.has_high_severity);
        assert!(report.has_medium_severity);
        assert_eq!(report.total_issues, 3);
    }

    #[test]
    fn empty_report_is_clean() {
        let report = SuggestionReport::new(vec![], vec![]);
        assert!(!report.has_high_severity);
        assert_eq!(report.total_issues, 0);
        assert!(report.summary().is_empty());
    }

    #[test]
    fn summary_lines() {
        let report = SuggestionReport::new(
            vec![
                secret(Severity::High),
                secret(Severity::High),
                secret(Severity::Medium),
            ],
            vec![todo(TodoMarker::Fixme, "b.ts")],
        );
        insta::assert_snapshot!(report.summary().join("\n"), @r"
        2 high-severity security issue(s) detected
        1 medium-severity security issue(s) detected
        1 TODO/FIXME comment(s) added
        ");
    }

    // ── helpers ────────────────────────────────────────────────────

    #[test]
    fn severity_summary_counts() {
        let summary = SeveritySummary::from_detections(&[
            secret(Severity::High),
            secret(Severity::Low),
            secret(Severity::Low),
        ]);
        assert_eq!(
            summary,
            SeveritySummary {
                high: 1,
                medium: 0,
                low: 2
            }
        );
    }

    #[test]
    fn group_by_file_keeps_first_seen_order() {
        let grouped = group_by_file(&[
            todo(TodoMarker::Todo, "b.ts"),
            todo(TodoMarker::Xxx, "a.ts"),
            todo(TodoMarker::Fixme, "b.ts"),
        ]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "b.ts");
        assert_eq!(grouped[0].1.len(), 2);
        assert_eq!(grouped[1].0, "a.ts");
    }

    #[test]
    fn count_by_marker_includes_zeroes() {
        let counts = count_by_marker(&[todo(TodoMarker::Todo, "a"), todo(TodoMarker::Todo, "b")]);
        assert_eq!(counts[&TodoMarker::Todo], 2);
        assert_eq!(counts[&TodoMarker::Fixme], 0);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn kinds_serialize_snake_case() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::to_string(&SecretKind::SensitiveFile)?,
            "\"sensitive_file\""
        );
        assert_eq!(serde_json::to_string(&TodoMarker::Fixme)?, "\"FIXME\"");
        Ok(())
    }
}
