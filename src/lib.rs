//! # git-agent
//!
//! Offline analysis of staged Git changes and commit history.
//!
//! ## Features
//!
//! - Classification of changed files into scoped groups
//! - Detection of sensitive files, hardcoded secrets and new TODO comments
//! - Branch name suggestions derived from the changeset
//! - A commit-message style profile learned from past subjects
//!
//! ## Quick Start
//!
//! ```rust
//! use git_agent::analysis::ChangeClassifier;
//!
//! let result = ChangeClassifier::classify(&["src/api/users.ts", "README.md"]);
//! assert_eq!(result.groups.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod data;
pub mod git;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of git-agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
