//! Terminal result types for bulk operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The operation a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Delete,
    Move,
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete => write!(f, "Delete"),
            Self::Move => write!(f, "Move"),
        }
    }
}

/// A single candidate the batch could not process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    /// The candidate that failed.
    pub path: PathBuf,
    /// A human-readable reason.
    pub reason: String,
}

impl FileFailure {
    /// Create a new per-file failure record.
    pub fn new(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Aggregated outcome of one bulk operation.
///
/// Built incrementally while the batch runs; handed to the observer once
/// every candidate has been attempted, and immutable from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationReport {
    /// What was performed.
    pub kind: OpKind,
    /// Files actually deleted or relocated.
    pub succeeded: usize,
    /// Same-folder no-ops, counted as neither success nor failure.
    pub skipped: usize,
    /// Per-file failures in the order they occurred.
    pub failures: Vec<FileFailure>,
}

impl OperationReport {
    /// Create an empty report for an operation.
    pub fn new(kind: OpKind) -> Self {
        Self {
            kind,
            succeeded: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    pub(crate) fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn record_failure(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.failures.push(FileFailure::new(path, reason));
    }

    /// Whether every attempted candidate succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// A human-readable one-line summary.
    pub fn summary(&self) -> String {
        let action = match self.kind {
            OpKind::Delete => "Deleted",
            OpKind::Move => "Moved",
        };

        if self.failures.is_empty() {
            format!("{} {} files", action, self.succeeded)
        } else {
            format!(
                "{} {} files, {} failed",
                action,
                self.succeeded,
                self.failures.len()
            )
        }
    }
}
