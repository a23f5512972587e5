//! Bulk move operations.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use filesift_core::Extension;
use filesift_scan::MatchScanner;

use crate::error::TaskError;
use crate::report::{OpKind, OperationReport};
use crate::resolver::resolve_destination;

/// Relocate every file under `root` whose name ends with `extension` into
/// `destination`, descending into all subdirectories.
///
/// The destination directory is created if absent; failing that is fatal
/// and no file is touched. Candidates already sitting in the destination
/// are skipped. A candidate that fails to move is recorded and the batch
/// continues; `succeeded` counts relocated files only.
pub fn move_matching<R: Rng + ?Sized>(
    scanner: &MatchScanner,
    root: &Path,
    destination: &Path,
    extension: &Extension,
    rng: &mut R,
) -> Result<OperationReport, TaskError> {
    let mut candidates = scanner.scan(root, extension)?.peekable();
    if candidates.peek().is_none() {
        return Err(TaskError::NoMatches {
            extension: extension.clone(),
            root: root.to_path_buf(),
        });
    }
    let destination = prepare_destination(destination)?;
    Ok(move_candidates(candidates, &destination, rng))
}

/// Relocate matching files directly inside `source` into `destination`;
/// no recursion.
pub fn move_directory<R: Rng + ?Sized>(
    scanner: &MatchScanner,
    source: &Path,
    destination: &Path,
    extension: &Extension,
    rng: &mut R,
) -> Result<OperationReport, TaskError> {
    let candidates = scanner.list_directory(source, extension)?;
    if candidates.is_empty() {
        return Err(TaskError::NoMatches {
            extension: extension.clone(),
            root: source.to_path_buf(),
        });
    }
    let destination = prepare_destination(destination)?;
    Ok(move_candidates(candidates.into_iter(), &destination, rng))
}

/// Ensure the destination exists and resolve it to a canonical path, so
/// the same-folder guard compares like with like.
fn prepare_destination(destination: &Path) -> Result<PathBuf, TaskError> {
    if !destination.exists() {
        fs::create_dir_all(destination).map_err(|source| TaskError::Destination {
            path: destination.to_path_buf(),
            source,
        })?;
    }
    destination
        .canonicalize()
        .map_err(|source| TaskError::Destination {
            path: destination.to_path_buf(),
            source,
        })
}

fn move_candidates<R: Rng + ?Sized>(
    candidates: impl Iterator<Item = PathBuf>,
    destination: &Path,
    rng: &mut R,
) -> OperationReport {
    let mut report = OperationReport::new(OpKind::Move);

    for source in candidates {
        // Same-folder guard: a candidate that is the destination itself or
        // already a direct child of it has nowhere to go.
        if source == destination || source.parent() == Some(destination) {
            report.record_skip();
            continue;
        }

        let Some(file_name) = source.file_name() else {
            report.record_failure(source, "candidate has no file name");
            continue;
        };
        let file_name = file_name.to_string_lossy().into_owned();
        let target = resolve_destination(destination, &file_name, rng);

        match move_file(&source, &target) {
            Ok(()) => report.record_success(),
            Err(reason) => {
                tracing::warn!(
                    path = %source.display(),
                    target = %target.display(),
                    %reason,
                    "failed to move"
                );
                report.record_failure(source, reason);
            }
        }
    }

    report
}

/// Move a single file.
fn move_file(source: &Path, target: &Path) -> Result<(), String> {
    // Try rename first (fast path for same filesystem)
    if fs::rename(source, target).is_ok() {
        return Ok(());
    }

    // Fall back to copy + delete for cross-filesystem moves
    fs::copy(source, target).map_err(|e| format!("Failed to copy: {}", e))?;
    fs::remove_file(source).map_err(|e| format!("Failed to remove source: {}", e))?;

    Ok(())
}
