//! Task-level errors.

use std::path::PathBuf;

use thiserror::Error;

use filesift_core::{Extension, ScanError};

/// Errors that end a task without producing a report.
///
/// These all fire before any candidate file is touched. Per-file failures
/// during a batch are not errors; they land in the report's failure list.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The scan root could not be enumerated at all.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The scan produced zero candidates.
    ///
    /// Surfaced on its own observer path; callers treat it as
    /// informational rather than as a failure.
    #[error("No {extension} files found under {root}")]
    NoMatches {
        extension: Extension,
        root: PathBuf,
    },

    /// A move task was submitted without a destination directory.
    #[error("Move task has no destination directory")]
    MissingDestination,

    /// The destination directory could not be created or resolved.
    #[error("Destination {path} is unusable: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// Whether this is the informational zero-candidates outcome.
    pub fn is_no_matches(&self) -> bool {
        matches!(self, Self::NoMatches { .. })
    }
}
