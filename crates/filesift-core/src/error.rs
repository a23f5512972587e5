//! Fatal scan-level errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan before any candidate is acted on.
///
/// Unreadable entries *inside* an otherwise readable root are not errors;
/// the scanner skips them and the scan degrades silently.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied on the scan root itself.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// The scan root does not exist.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// The scan root exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Any other I/O failure while opening the scan root.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
