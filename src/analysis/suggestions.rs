//! Combined security report over a staged changeset.

use crate::analysis::secrets::SecretsDetector;
use crate::analysis::todos::TodosDetector;
use crate::data::SuggestionReport;

/// Runs the secret and TODO scans and aggregates the findings.
///
/// The engine only reports; gating a commit on `has_high_severity` is the
/// caller's decision.
#[derive(Debug, Default)]
pub struct SuggestionsEngine {
    secrets: SecretsDetector,
}

impl SuggestionsEngine {
    /// Creates an engine with the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine around a configured secrets detector.
    pub fn with_detector(secrets: SecretsDetector) -> Self {
        Self { secrets }
    }

    /// Scans staged file names and diff text.
    pub fn analyze<S: AsRef<str>>(&self, files: &[S], diff: &str) -> SuggestionReport {
        let secrets = self.secrets.detect(files, diff);
        let todos = TodosDetector::detect(diff);
        SuggestionReport::new(secrets, todos)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::data::Severity;
    use proptest::prelude::*;

    const DIFF: &str = "\
diff --git a/src/client.ts b/src/client.ts
+++ b/src/client.ts
+const apiKey = 'live_123';
+fetch(url, { headers: { Authorization: 'Bearer abc123' } });
+// TODO: move key to env
";

    #[test]
    fn aggregates_both_scans() {
        let report = SuggestionsEngine::new().analyze(&[".env", "src/client.ts"], DIFF);

        assert_eq!(report.secrets.len(), 3);
        assert_eq!(report.todos.len(), 1);
        assert!(report.has_high_severity);
        assert!(report.has_medium_severity);
        assert_eq!(report.total_issues, 4);
    }

    #[test]
    fn clean_changeset() {
        let report = SuggestionsEngine::new().analyze(&["src/a.ts"], "+let a = 1;\n");
        assert_eq!(report, SuggestionReport::default());
    }

    #[test]
    fn todos_alone_do_not_raise_severity() {
        let report = SuggestionsEngine::new().analyze::<&str>(&[], "+// FIXME: later\n");
        assert!(!report.has_high_severity);
        assert!(!report.has_medium_severity);
        assert_eq!(report.total_issues, 1);
    }

    #[test]
    fn custom_detector_is_used() -> anyhow::Result<()> {
        let detector =
            SecretsDetector::new().with_pattern("Internal Host", r"corp\.internal", Severity::Low)?;
        let report = SuggestionsEngine::with_detector(detector)
            .analyze::<&str>(&[], "+const host = 'db.corp.internal';\n");
        assert_eq!(report.secrets.len(), 1);
        assert!(!report.has_high_severity);
        Ok(())
    }

    // ── properties ─────────────────────────────────────────────────

    fn file_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(".env".to_string()),
            Just("config/id_rsa".to_string()),
            Just("certs/server.pem".to_string()),
            "[a-z]{1,8}/[a-z]{1,8}\\.(ts|rs|md)",
        ]
    }

    fn diff_line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "diff --git a/[a-z]{1,6}\\.ts b/[a-z]{1,6}\\.ts",
            Just("+const password = 'hunter22';".to_string()),
            Just("+headers.set('Authorization', 'Bearer abc.def');".to_string()),
            Just("+// TODO: tidy up".to_string()),
            Just("+// hack something".to_string()),
            Just("-const token = 'old';".to_string()),
            "[+ ][a-zA-Z0-9 =;'_]{0,30}",
        ]
    }

    proptest! {
        #[test]
        fn analyze_is_idempotent(
            files in proptest::collection::vec(file_strategy(), 0..6),
            lines in proptest::collection::vec(diff_line_strategy(), 0..20),
        ) {
            let diff: String = lines.iter().map(|l| format!("{l}\n")).collect();
            let engine = SuggestionsEngine::new();

            let first = engine.analyze(&files, &diff);
            let second = engine.analyze(&files, &diff);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(
                crate::data::to_yaml(&first).unwrap(),
                crate::data::to_yaml(&second).unwrap()
            );
        }
    }
}
