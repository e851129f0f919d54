//! Branch name suggestions for a changeset.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use tracing::debug;

use crate::analysis::patterns::{
    is_branch_config_path, is_doc_path, is_test_path, BRANCH_SCOPE_PATTERNS,
    BRANCH_TYPE_KEYWORDS, SOURCE_EXTENSION,
};
use crate::data::BranchType;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());

/// Branch name suggester.
pub struct BranchNameSuggester;

impl BranchNameSuggester {
    /// Suggests a `type/scope-description` branch name.
    pub fn suggest<S: AsRef<str>>(files: &[S], diff: Option<&str>) -> String {
        let branch_type = infer_type(files, diff);
        let scope = infer_scope(files);
        let description = describe(files, branch_type);

        let name = format_name(branch_type, scope, &description);
        debug!(branch = %name, "Suggested branch name");
        name
    }

    /// Suggests several candidates, using today's UTC date for the dated one.
    pub fn suggest_many<S: AsRef<str>>(files: &[S], diff: Option<&str>) -> Vec<String> {
        Self::suggest_many_on(files, diff, Utc::now().date_naive())
    }

    /// Suggests several candidates for a fixed date.
    ///
    /// The primary name comes first, then a scope-less variant when a scope
    /// was found, then a dated name. Candidates are distinct.
    pub fn suggest_many_on<S: AsRef<str>>(
        files: &[S],
        diff: Option<&str>,
        date: NaiveDate,
    ) -> Vec<String> {
        let branch_type = infer_type(files, diff);
        let scope = infer_scope(files);
        let description = describe(files, branch_type);

        let mut suggestions = vec![format_name(branch_type, scope, &description)];
        if scope.is_some() {
            suggestions.push(format_name(branch_type, None, &description));
        }
        let dated = format_name(branch_type, scope, &date_token(date));
        if !suggestions.contains(&dated) {
            suggestions.push(dated);
        }

        suggestions
    }
}

fn format_name(branch_type: BranchType, scope: Option<&str>, description: &str) -> String {
    match scope {
        Some(scope) => format!("{branch_type}/{scope}-{description}"),
        None => format!("{branch_type}/{description}"),
    }
}

/// Infers the branch type from diff keywords, then from the file mix.
fn infer_type<S: AsRef<str>>(files: &[S], diff: Option<&str>) -> BranchType {
    if let Some(diff) = diff {
        if let Some((branch_type, _)) = BRANCH_TYPE_KEYWORDS
            .iter()
            .find(|(_, regex)| regex.is_match(diff))
        {
            return *branch_type;
        }
    }

    if files.is_empty() {
        return BranchType::Feat;
    }

    let all = |predicate: fn(&str) -> bool| files.iter().all(|f| predicate(f.as_ref()));

    if all(is_doc_path) {
        BranchType::Docs
    } else if all(is_branch_config_path) {
        BranchType::Chore
    } else if all(is_test_path) {
        BranchType::Test
    } else {
        BranchType::Feat
    }
}

fn infer_scope<S: AsRef<str>>(files: &[S]) -> Option<&'static str> {
    BRANCH_SCOPE_PATTERNS
        .iter()
        .find(|(_, regex)| files.iter().any(|f| regex.is_match(f.as_ref())))
        .map(|(scope, _)| *scope)
}

fn describe<S: AsRef<str>>(files: &[S], branch_type: BranchType) -> String {
    let description = files
        .first()
        .map(|file| {
            let file = file.as_ref();
            let base = file.rsplit('/').next().unwrap_or(file);
            kebab_case(&SOURCE_EXTENSION.replace(base, ""))
        })
        .unwrap_or_default();

    if description.is_empty() {
        branch_type.default_description().to_string()
    } else {
        description
    }
}

/// Converts a name to lowercase kebab-case restricted to `[a-z0-9-]`.
pub fn kebab_case(input: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(input, "$1-$2");
    let joined = SEPARATORS.replace_all(&split, "-");
    let lowered = joined.to_lowercase();
    DISALLOWED.replace_all(&lowered, "").into_owned()
}

/// Last six digits of `YYYYMMDD`.
fn date_token(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}
