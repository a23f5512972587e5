//! Bulk delete operations.

use std::fs;
use std::path::{Path, PathBuf};

use filesift_core::Extension;
use filesift_scan::MatchScanner;

use crate::error::TaskError;
use crate::report::{OpKind, OperationReport};

/// Permanently delete every file under `root` whose name ends with
/// `extension`, descending into all subdirectories.
///
/// Zero candidates is [`TaskError::NoMatches`], not an empty report. A
/// candidate that fails to delete is recorded and the batch continues;
/// `succeeded` counts the files actually removed. There is no trash and
/// no undo.
pub fn delete_matching(
    scanner: &MatchScanner,
    root: &Path,
    extension: &Extension,
) -> Result<OperationReport, TaskError> {
    let mut candidates = scanner.scan(root, extension)?.peekable();
    if candidates.peek().is_none() {
        return Err(TaskError::NoMatches {
            extension: extension.clone(),
            root: root.to_path_buf(),
        });
    }
    Ok(delete_candidates(candidates))
}

/// Delete matching files directly inside `dir`; no recursion.
pub fn delete_directory(
    scanner: &MatchScanner,
    dir: &Path,
    extension: &Extension,
) -> Result<OperationReport, TaskError> {
    let candidates = scanner.list_directory(dir, extension)?;
    if candidates.is_empty() {
        return Err(TaskError::NoMatches {
            extension: extension.clone(),
            root: dir.to_path_buf(),
        });
    }
    Ok(delete_candidates(candidates.into_iter()))
}

fn delete_candidates(candidates: impl Iterator<Item = PathBuf>) -> OperationReport {
    let mut report = OperationReport::new(OpKind::Delete);
    for path in candidates {
        match fs::remove_file(&path) {
            Ok(()) => report.record_success(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to delete");
                report.record_failure(path, err.to_string());
            }
        }
    }
    report
}
