//! Git operations and diff utilities.

pub mod diff;
pub mod repository;

pub use diff::DiffLines;
pub use repository::{GitRepository, FILE_HISTORY_LIMIT};
