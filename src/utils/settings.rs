//! Settings and configuration utilities.
//!
//! Values come from the process environment first, then from
//! `$HOME/.git-agent/settings.json`:
//!
//! ```json
//! { "env": { "GIT_AGENT_LEARN_COMMITS": "200" } }
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::data::store::AGENT_DIR_NAME;

/// Overrides the profile directory.
pub const AGENT_DIR_ENV: &str = "GIT_AGENT_DIR";

/// Overrides the default history depth of `learn`.
pub const LEARN_COMMITS_ENV: &str = "GIT_AGENT_LEARN_COMMITS";

/// History depth of `learn` when nothing else is configured.
pub const DEFAULT_LEARN_COMMITS: usize = 100;

/// Settings loaded from $HOME/.git-agent/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path; a missing file yields defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings = serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        debug!(path = %path.display(), keys = settings.env.len(), "Loaded settings");
        Ok(settings)
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(AGENT_DIR_NAME).join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Resolves the profile directory.
    ///
    /// Precedence: explicit override, then [`AGENT_DIR_ENV`], then
    /// `.git-agent` under `workdir`.
    pub fn agent_dir(&self, explicit: Option<&Path>, workdir: &Path) -> PathBuf {
        if let Some(dir) = explicit {
            return dir.to_path_buf();
        }

        match self.get_env_var(AGENT_DIR_ENV) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => workdir.join(AGENT_DIR_NAME),
        }
    }

    /// Resolves the number of commits `learn` reads.
    ///
    /// Precedence: explicit override, then [`LEARN_COMMITS_ENV`], then
    /// [`DEFAULT_LEARN_COMMITS`].
    pub fn learn_commits(&self, explicit: Option<usize>) -> Result<usize> {
        if let Some(n) = explicit {
            return Ok(n);
        }

        match self.get_env_var(LEARN_COMMITS_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {LEARN_COMMITS_ENV} value: {raw}")),
            None => Ok(DEFAULT_LEARN_COMMITS),
        }
    }
}
