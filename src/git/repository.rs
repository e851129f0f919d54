//! Git repository access for staged changes and history.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use git2::{Commit, Delta, DiffFindOptions, DiffFormat, Repository, Sort, Tree};
use tracing::debug;

use crate::data::ContributionRecord;

/// Maximum history entries inspected per file when ranking reviewers.
pub const FILE_HISTORY_LIMIT: usize = 50;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open repository at current directory
    pub fn open() -> Result<Self> {
        let repo = Repository::discover(".").context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Open repository at specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path)
            .with_context(|| format!("Failed to open git repository: {}", path.display()))?;

        Ok(Self { repo })
    }

    /// Get workdir path
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get current branch name
    pub fn get_current_branch(&self) -> Result<String> {
        let head = self.repo.head().context("Failed to get HEAD reference")?;

        if let Some(name) = head.shorthand() {
            if name != "HEAD" {
                return Ok(name.to_string());
            }
        }

        anyhow::bail!("Repository is in detached HEAD state")
    }

    /// Returns the configured `user.email`, if any.
    pub fn user_email(&self) -> Result<Option<String>> {
        let config = self.repo.config().context("Failed to read git config")?;
        Ok(config.get_string("user.email").ok())
    }

    /// Paths staged in the index relative to HEAD, in diff order.
    pub fn staged_files(&self) -> Result<Vec<String>> {
        let head_tree = self.head_tree()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .context("Failed to diff index against HEAD")?;

        let files = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .collect();

        Ok(files)
    }

    /// Unified diff text of the staged changes.
    pub fn staged_diff(&self) -> Result<String> {
        let head_tree = self.head_tree()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .context("Failed to diff index against HEAD")?;

        let mut text = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            // Lossy decoding keeps every line and its newline intact.
            let content = String::from_utf8_lossy(line.content());
            match line.origin() {
                origin @ ('+' | '-' | ' ') => text.push(origin),
                _ => {}
            }
            text.push_str(&content);
            true
        })
        .context("Failed to format staged diff")?;

        Ok(text)
    }

    /// Subjects of the last `limit` commits reachable from HEAD, newest first.
    ///
    /// With `author`, only commits whose author name or email contains it
    /// (case-insensitively) are kept. An unborn HEAD yields no subjects.
    pub fn commit_subjects(&self, limit: usize, author: Option<&str>) -> Result<Vec<String>> {
        let Some(head) = self.head_commit()? else {
            return Ok(Vec::new());
        };

        let needle = author.map(str::to_lowercase);
        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker.set_sorting(Sort::TIME).context("Failed to sort revwalk")?;
        walker.push(head.id()).context("Failed to push HEAD")?;

        let mut subjects = Vec::new();
        for oid in walker {
            if subjects.len() >= limit {
                break;
            }

            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self.repo.find_commit(oid).context("Failed to find commit")?;

            if let Some(needle) = &needle {
                let author = commit.author();
                let name = author.name().unwrap_or_default().to_lowercase();
                let email = author.email().unwrap_or_default().to_lowercase();
                if !name.contains(needle.as_str()) && !email.contains(needle.as_str()) {
                    continue;
                }
            }

            if let Some(subject) = commit.summary() {
                subjects.push(subject.to_string());
            }
        }

        debug!(count = subjects.len(), limit, "Collected commit subjects");
        Ok(subjects)
    }

    /// Subjects of commits in `base..HEAD`, newest first.
    pub fn subjects_since(&self, base: &str) -> Result<Vec<String>> {
        let Some(head) = self.head_commit()? else {
            return Ok(Vec::new());
        };

        let base_commit = self
            .repo
            .revparse_single(base)
            .with_context(|| format!("Failed to parse base revision: {}", base))?
            .peel_to_commit()
            .with_context(|| format!("Base revision is not a commit: {}", base))?;

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker.set_sorting(Sort::TIME).context("Failed to sort revwalk")?;
        walker.push(head.id()).context("Failed to push HEAD")?;
        walker
            .hide(base_commit.id())
            .context("Failed to hide base commit")?;

        let mut subjects = Vec::new();
        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self.repo.find_commit(oid).context("Failed to find commit")?;
            if let Some(subject) = commit.summary() {
                subjects.push(subject.to_string());
            }
        }

        debug!(base, count = subjects.len(), "Collected branch subjects");
        Ok(subjects)
    }

    /// Authors of the most recent commits touching `path`, newest first.
    ///
    /// Renames are followed, so commits made under earlier names count too.
    pub fn file_contributors(&self, path: &str, limit: usize) -> Result<Vec<ContributionRecord>> {
        let Some(head) = self.head_commit()? else {
            return Ok(Vec::new());
        };

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker.set_sorting(Sort::TIME).context("Failed to sort revwalk")?;
        walker.push(head.id()).context("Failed to push HEAD")?;

        let mut current = path.to_string();
        let mut records = Vec::new();
        for oid in walker {
            if records.len() >= limit {
                break;
            }

            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self.repo.find_commit(oid).context("Failed to find commit")?;
            let Some(previous) = self.touched_path(&commit, &current)? else {
                continue;
            };
            current = previous;

            let author = commit.author();
            records.push(ContributionRecord {
                name: author.name().unwrap_or_default().to_string(),
                email: author.email().unwrap_or_default().to_string(),
                date: author_date(author.when()),
            });
        }

        debug!(path, count = records.len(), "Collected file history");
        Ok(records)
    }

    /// Returns the pre-commit path of `path` when `commit` changed it.
    fn touched_path(&self, commit: &Commit<'_>, path: &str) -> Result<Option<String>> {
        let tree = commit.tree().context("Failed to get commit tree")?;
        let parent_tree = match commit.parent_count() {
            0 => None,
            _ => Some(
                commit
                    .parent(0)
                    .context("Failed to get parent commit")?
                    .tree()
                    .context("Failed to get parent tree")?,
            ),
        };

        let mut diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
            .context("Failed to diff commit")?;
        let mut find = DiffFindOptions::new();
        find.renames(true);
        diff.find_similar(Some(&mut find))
            .context("Failed to detect renames")?;

        let target = Path::new(path);
        let touched = diff
            .deltas()
            .find(|delta| delta.new_file().path() == Some(target))
            .map(|delta| match (delta.status(), delta.old_file().path()) {
                (Delta::Renamed, Some(old)) => old.to_string_lossy().into_owned(),
                _ => path.to_string(),
            });

        Ok(touched)
    }

    fn head_commit(&self) -> Result<Option<Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(
                head.peel_to_commit()
                    .context("Failed to peel HEAD to commit")?,
            )),
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to get HEAD reference"),
        }
    }

    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        self.head_commit()?
            .map(|commit| commit.tree().context("Failed to get HEAD tree"))
            .transpose()
    }
}

/// Converts a git timestamp to the author's local calendar date.
fn author_date(time: git2::Time) -> NaiveDate {
    let utc = DateTime::from_timestamp(time.seconds(), 0).unwrap_or_default();
    match FixedOffset::east_opt(time.offset_minutes() * 60) {
        Some(offset) => utc.with_timezone(&offset).date_naive(),
        None => utc.date_naive(),
    }
}
