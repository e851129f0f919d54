//! TODO-style comment extraction from added diff lines.

use tracing::debug;

use crate::analysis::patterns::TODO_PATTERNS;
use crate::data::TodoDetection;
use crate::git::diff::DiffLines;

/// Message recorded when a marker has no trailing text.
const NO_DESCRIPTION: &str = "No description";

/// TODO/FIXME/HACK/XXX comment detector.
pub struct TodosDetector;

impl TodosDetector {
    /// Collects every marker comment on added lines.
    ///
    /// Markers are matched case-insensitively after `//`; every match on a
    /// line is reported.
    pub fn detect(diff: &str) -> Vec<TodoDetection> {
        let lines = DiffLines::new(diff);
        let mut detections = Vec::new();

        for (index, content) in lines.added() {
            for (marker, regex) in TODO_PATTERNS.iter() {
                for captures in regex.captures_iter(content) {
                    let message = captures
                        .get(1)
                        .map(|m| m.as_str().trim())
                        .filter(|m| !m.is_empty())
                        .unwrap_or(NO_DESCRIPTION);

                    detections.push(TodoDetection {
                        marker: *marker,
                        file: lines.file_for(index).to_string(),
                        raw_line: content.trim().to_string(),
                        message: message.to_string(),
                    });
                }
            }
        }

        debug!(todos = detections.len(), "TODO scan complete");
        detections
    }
}
