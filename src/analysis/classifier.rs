//! Changed-file classification into scoped groups.

use tracing::debug;

use crate::analysis::patterns::{
    is_code_path, is_config_path, is_doc_path, is_test_path, scope_label,
};
use crate::data::{AnalysisResult, FileCategory, FileGroup};

/// Advisory emitted when code changes come without tests.
pub const MISSING_TESTS_SUGGESTION: &str = "No tests detected for code changes";

/// Advisory emitted when code changes come without documentation.
pub const MISSING_DOCS_SUGGESTION: &str = "No documentation updates detected";

/// Changeset classifier.
pub struct ChangeClassifier;

impl ChangeClassifier {
    /// Classifies changed paths into `(scope, category)` groups.
    ///
    /// Every input path lands in exactly one group. Groups appear in the
    /// order their first file was seen, and files keep input order.
    pub fn classify<S: AsRef<str>>(files: &[S]) -> AnalysisResult {
        let mut groups: Vec<FileGroup> = Vec::new();

        for file in files {
            let file = file.as_ref();
            let (label, scope, category) = categorize(file);

            match groups
                .iter_mut()
                .find(|g| g.scope == scope && g.category == category)
            {
                Some(group) => group.files.push(file.to_string()),
                None => groups.push(FileGroup {
                    label,
                    scope,
                    files: vec![file.to_string()],
                    category,
                }),
            }
        }

        let suggestions = advisories(files);

        debug!(
            files = files.len(),
            groups = groups.len(),
            suggestions = suggestions.len(),
            "Classified changeset"
        );

        AnalysisResult {
            has_multiple_scopes: groups.len() > 1,
            total_files: files.len(),
            groups,
            suggestions,
        }
    }
}

/// Derives the `(label, scope, category)` triple for one path.
fn categorize(path: &str) -> (String, String, FileCategory) {
    if is_test_path(path) {
        return ("Tests".to_string(), extract_scope(path), FileCategory::Tests);
    }

    if is_doc_path(path) {
        return (
            "Documentation".to_string(),
            "docs".to_string(),
            FileCategory::Docs,
        );
    }

    if is_config_path(path) {
        return (
            "Configuration".to_string(),
            "config".to_string(),
            FileCategory::Config,
        );
    }

    let scope = extract_scope(path);
    (scope_label(&scope), scope, FileCategory::Code)
}

/// Extracts the scope token of a path.
///
/// The segment after the first `src` or `lib` segment wins; otherwise the
/// first segment of a nested path; otherwise `root`.
pub fn extract_scope(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').collect();

    if let Some(index) = parts.iter().position(|p| *p == "src" || *p == "lib") {
        if let Some(next) = parts.get(index + 1).filter(|s| !s.is_empty()) {
            return (*next).to_string();
        }
    }

    if parts.len() > 1 {
        return parts[0].to_string();
    }

    "root".to_string()
}

fn advisories<S: AsRef<str>>(files: &[S]) -> Vec<String> {
    let has_tests = files.iter().any(|f| is_test_path(f.as_ref()));
    let has_docs = files.iter().any(|f| is_doc_path(f.as_ref()));
    let has_code = files.iter().any(|f| {
        let f = f.as_ref();
        is_code_path(f) && !is_test_path(f)
    });

    let mut suggestions = Vec::new();
    if has_code && !has_tests {
        suggestions.push(MISSING_TESTS_SUGGESTION.to_string());
    }
    if has_code && !has_docs {
        suggestions.push(MISSING_DOCS_SUGGESTION.to_string());
    }
    suggestions
}
