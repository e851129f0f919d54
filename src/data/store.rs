//! On-disk storage for the learned style profile.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::data::LearnedStyle;

/// File name of the profile inside the agent directory.
pub const STYLE_FILE_NAME: &str = "learned-style.json";

/// Default project-relative agent directory.
pub const AGENT_DIR_NAME: &str = ".git-agent";

/// Reads, writes and deletes the learned style profile.
#[derive(Debug, Clone)]
pub struct StyleStore {
    dir: PathBuf,
}

impl StyleStore {
    /// Creates a store rooted at the given agent directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the agent directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the profile path.
    pub fn path(&self) -> PathBuf {
        self.dir.join(STYLE_FILE_NAME)
    }

    /// Writes the profile, replacing any previous one.
    pub fn save(&self, style: &LearnedStyle) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create profile directory: {}", self.dir.display())
        })?;

        let path = self.path();
        let json =
            serde_json::to_string_pretty(style).context("Failed to serialize style profile")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write style profile: {}", path.display()))?;

        self.ensure_gitignored()?;

        debug!(path = %path.display(), commits = style.analyzed_commits, "Saved style profile");
        Ok(path)
    }

    /// Loads the profile if one has been saved.
    pub fn load(&self) -> Result<Option<LearnedStyle>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read style profile: {}", path.display()))?;
        let style = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse style profile: {}", path.display()))?;

        Ok(Some(style))
    }

    /// Deletes the profile; returns whether a file was removed.
    pub fn reset(&self) -> Result<bool> {
        let path = self.path();
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete style profile: {}", path.display()))?;
        Ok(true)
    }

    /// Appends the agent directory to a sibling `.gitignore`, if one exists.
    fn ensure_gitignored(&self) -> Result<()> {
        let Some(entry) = self.gitignore_entry() else {
            return Ok(());
        };
        let parent = match self.dir.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let gitignore = parent.join(".gitignore");
        if !gitignore.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&gitignore)
            .with_context(|| format!("Failed to read {}", gitignore.display()))?;
        if content.lines().any(|line| line.trim() == entry) {
            return Ok(());
        }

        let mut updated = content;
        updated.push_str("\n# Git Agent\n");
        updated.push_str(&entry);
        updated.push('\n');
        fs::write(&gitignore, updated)
            .with_context(|| format!("Failed to update {}", gitignore.display()))?;

        debug!(entry = %entry, path = %gitignore.display(), "Added .gitignore entry");
        Ok(())
    }

    /// `.gitignore` line naming the agent directory, e.g. `.git-agent/`.
    fn gitignore_entry(&self) -> Option<String> {
        self.dir
            .file_name()
            .map(|name| format!("{}/", name.to_string_lossy()))
    }
}
