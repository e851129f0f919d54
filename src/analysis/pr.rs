//! Pull-request title and body drafting.

use std::sync::LazyLock;

use regex::Regex;

use crate::data::PrDraft;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static PR_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(feat|fix|docs|refactor|test|chore|style):").unwrap()
});

const EMPTY_TITLE: &str = "Feature update";
const DEFAULT_TYPE: &str = "feat";

impl PrDraft {
    /// Drafts a pull request from the subjects of the commits it contains.
    pub fn from_subjects<S: AsRef<str>>(subjects: &[S]) -> Self {
        Self {
            title: title(subjects),
            body: body(subjects),
        }
    }
}

fn title<S: AsRef<str>>(subjects: &[S]) -> String {
    match subjects {
        [] => EMPTY_TITLE.to_string(),
        [only] => only.as_ref().to_string(),
        _ => format!(
            "{}: Multiple updates ({} commits)",
            dominant_type(subjects),
            subjects.len()
        ),
    }
}

/// Most frequent commit type; ties go to the type seen first.
fn dominant_type<S: AsRef<str>>(subjects: &[S]) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for subject in subjects {
        let commit_type = PR_TYPE
            .captures(subject.as_ref())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_else(|| DEFAULT_TYPE.to_string());

        match counts.iter_mut().find(|(t, _)| *t == commit_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((commit_type, 1)),
        }
    }

    counts
        .iter()
        .fold(None, |best: Option<&(String, usize)>, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })
        .map(|(t, _)| t.clone())
        .unwrap_or_else(|| DEFAULT_TYPE.to_string())
}

fn body<S: AsRef<str>>(subjects: &[S]) -> String {
    let mut body = String::from("## Changes\n\n");

    match subjects {
        [] => body.push_str("No commit messages available.\n"),
        [only] => {
            body.push_str(only.as_ref());
            body.push('\n');
        }
        _ => {
            for subject in subjects {
                body.push_str("- ");
                body.push_str(subject.as_ref());
                body.push('\n');
            }
        }
    }

    body.push_str("\n## Checklist\n\n");
    body.push_str("- [ ] Code reviewed\n");
    body.push_str("- [ ] Tests passing\n");
    body.push_str("- [ ] Documentation updated\n");
    body
}
