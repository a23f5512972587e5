//! Task description submitted by callers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Extension;

/// The operation a task performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Permanently remove every match.
    Delete,
    /// Relocate every match into a destination directory.
    Move,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete => write!(f, "Delete"),
            Self::Move => write!(f, "Move"),
        }
    }
}

/// A bulk operation over every file matching an extension under a root.
///
/// Built once by the caller, immutable after submission. The scan root is
/// always explicit; whole-filesystem scope means the caller passed `/` (or
/// a drive root) deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTask {
    pub kind: TaskKind,
    pub extension: Extension,
    pub scan_root: PathBuf,
    /// Destination directory; present iff `kind` is [`TaskKind::Move`].
    pub destination: Option<PathBuf>,
}

impl FileTask {
    /// A recursive delete of every match under `scan_root`.
    pub fn delete(extension: Extension, scan_root: impl Into<PathBuf>) -> Self {
        Self {
            kind: TaskKind::Delete,
            extension,
            scan_root: scan_root.into(),
            destination: None,
        }
    }

    /// A recursive move of every match under `scan_root` into `destination`.
    pub fn move_to(
        extension: Extension,
        scan_root: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind: TaskKind::Move,
            extension,
            scan_root: scan_root.into(),
            destination: Some(destination.into()),
        }
    }
}
