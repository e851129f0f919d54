//! Line-level helpers over unified diff text.

/// Prefix of the per-file header line in a unified diff.
const FILE_DIFF_MARKER: &str = "diff --git a/";

/// Attribution used when no file header precedes a line.
pub const UNKNOWN_FILE: &str = "unknown file";

/// A unified diff split into lines, with file attribution by backward scan.
///
/// The owning file of every line is resolved once, up front, as the nearest
/// parseable `diff --git` header at or above it.
#[derive(Debug, Clone)]
pub struct DiffLines<'a> {
    lines: Vec<&'a str>,
    owners: Vec<&'a str>,
}

impl<'a> DiffLines<'a> {
    /// Splits diff text into lines and resolves their owning files.
    pub fn new(diff: &'a str) -> Self {
        let lines: Vec<&'a str> = diff.lines().collect();
        let owners = lines
            .iter()
            .copied()
            .scan(UNKNOWN_FILE, |current, line| {
                if let Some(path) = header_path(line) {
                    *current = path;
                }
                Some(*current)
            })
            .collect();

        Self { lines, owners }
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the diff has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over added lines as `(index, content)` with the `+` stripped.
    ///
    /// Every line starting with `+` counts, including `+++` headers.
    pub fn added(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| line.strip_prefix('+').map(|content| (index, content)))
    }

    /// Returns the file owning the line at `index`.
    ///
    /// Indexes past the end resolve like the last line; [`UNKNOWN_FILE`]
    /// when no header precedes the line.
    pub fn file_for(&self, index: usize) -> &'a str {
        let end = index.min(self.owners.len().saturating_sub(1));
        self.owners.get(end).copied().unwrap_or(UNKNOWN_FILE)
    }
}

/// Extracts the `a/` path from a `diff --git a/<path> b/<path>` header.
///
/// Splits on the last ` b/` that is followed by a non-empty path, so paths
/// containing spaces survive.
pub fn header_path(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(FILE_DIFF_MARKER)?;

    rest.rmatch_indices(" b/")
        .find(|(pos, _)| *pos > 0 && pos + 3 < rest.len())
        .map(|(pos, _)| &rest[..pos])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TWO_FILE_DIFF: &str = "\
diff --git a/src/config.ts b/src/config.ts
index 1111111..2222222 100644
--- a/src/config.ts
+++ b/src/config.ts
@@ -1,2 +1,3 @@
 export const a = 1;
-export const b = 2;
+export const b = 3;
diff --git a/src/app.ts b/src/app.ts
--- a/src/app.ts
+++ b/src/app.ts
@@ -1 +1,2 @@
+run();
";

    // ── header parsing ─────────────────────────────────────────────

    #[test]
    fn header_path_simple() {
        assert_eq!(header_path("diff --git a/src/a.rs b/src/a.rs"), Some("src/a.rs"));
    }

    #[test]
    fn header_path_with_spaces() {
        assert_eq!(
            header_path("diff --git a/my docs/intro.md b/my docs/intro.md"),
            Some("my docs/intro.md")
        );
    }

    #[test]
    fn header_path_rename_reports_old_path() {
        assert_eq!(header_path("diff --git a/old.rs b/new.rs"), Some("old.rs"));
    }

    #[test]
    fn header_path_rejects_malformed() {
        assert_eq!(header_path("diff --git a/only-one-path"), None);
        assert_eq!(header_path("diff --git a/x b/"), None);
        assert_eq!(header_path("index 123..456"), None);
    }

    // ── added lines ────────────────────────────────────────────────

    #[test]
    fn added_lines_include_file_headers() {
        let diff = DiffLines::new(TWO_FILE_DIFF);
        let added: Vec<&str> = diff.added().map(|(_, line)| line).collect();
        assert_eq!(
            added,
            vec!["++ b/src/config.ts", "export const b = 3;", "++ b/src/app.ts", "run();"]
        );
    }

    #[test]
    fn removed_lines_are_skipped() {
        let diff = DiffLines::new("-password = 'x'\n context\n");
        assert_eq!(diff.added().count(), 0);
    }

    // ── attribution ────────────────────────────────────────────────

    #[test]
    fn file_for_finds_nearest_header() {
        let diff = DiffLines::new(TWO_FILE_DIFF);
        let files: Vec<&str> = diff.added().map(|(i, _)| diff.file_for(i)).collect();
        assert_eq!(
            files,
            vec!["src/config.ts", "src/config.ts", "src/app.ts", "src/app.ts"]
        );
    }

    #[test]
    fn file_for_without_header() {
        let diff = DiffLines::new("+const token = 'abc';\n");
        assert_eq!(diff.file_for(0), UNKNOWN_FILE);
    }

    #[test]
    fn file_for_skips_malformed_header() {
        let diff = DiffLines::new("diff --git a/real.ts b/real.ts\ndiff --git a/broken\n+x\n");
        assert_eq!(diff.file_for(2), "real.ts");
    }

    #[test]
    fn file_for_out_of_range_and_empty() {
        let diff = DiffLines::new(TWO_FILE_DIFF);
        assert_eq!(diff.file_for(10_000), "src/app.ts");
        assert_eq!(DiffLines::new("").file_for(0), UNKNOWN_FILE);
    }

    #[test]
    fn header_line_owns_itself() {
        let diff = DiffLines::new("+orphan\ndiff --git a/a.rs b/a.rs\n+x\ndiff --git a/b.rs b/b.rs\n");
        assert_eq!(diff.file_for(0), UNKNOWN_FILE);
        assert_eq!(diff.file_for(1), "a.rs");
        assert_eq!(diff.file_for(2), "a.rs");
        assert_eq!(diff.file_for(3), "b.rs");
    }

    // ── properties ─────────────────────────────────────────────────

    fn rescan(lines: &[&str], index: usize) -> String {
        lines[..=index]
            .iter()
            .rev()
            .find_map(|line| header_path(line))
            .unwrap_or(UNKNOWN_FILE)
            .to_string()
    }

    proptest! {
        #[test]
        fn owners_match_backward_rescan(
            picks in proptest::collection::vec(0usize..5, 0..40)
        ) {
            let pool = [
                "diff --git a/src/a.rs b/src/a.rs",
                "diff --git a/docs/b.md b/docs/b.md",
                "diff --git a/broken",
                "+let token = \"x\";",
                " context",
            ];
            let text: String = picks.iter().map(|&i| format!("{}\n", pool[i])).collect();
            let lines: Vec<&str> = text.lines().collect();
            let diff = DiffLines::new(&text);

            for index in 0..lines.len() {
                prop_assert_eq!(diff.file_for(index), rescan(&lines, index));
            }
        }
    }
}
