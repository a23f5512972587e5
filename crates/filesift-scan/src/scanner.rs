//! Extension-match directory scanner.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jwalk::{DirEntryIter, Parallelism, WalkDir};

use filesift_core::{Extension, ScanError};

use crate::options::ScanOptions;

/// Finds files matching an extension under a root.
#[derive(Debug, Clone, Default)]
pub struct MatchScanner {
    options: ScanOptions,
}

impl MatchScanner {
    /// Create a scanner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with explicit options.
    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// The options this scanner runs with.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Lazily enumerate every file under `root` whose name ends with
    /// `extension`, descending into all subdirectories.
    ///
    /// Paths are yielded in traversal order, which is unspecified. A fresh
    /// call restarts enumeration from the filesystem's current state.
    ///
    /// Fails only if `root` is missing, unreadable, or not a directory.
    /// Zero matches is an empty iterator, not an error.
    pub fn scan(&self, root: &Path, extension: &Extension) -> Result<Matches, ScanError> {
        let root = canonical_root(root)?;
        // Probe readability up front; past this point unreadable subtrees
        // only degrade the scan.
        fs::read_dir(&root).map_err(|e| ScanError::io(&root, e))?;

        let parallelism = match self.options.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let walker = WalkDir::new(&root)
            .parallelism(parallelism)
            .skip_hidden(self.options.skip_hidden)
            .follow_links(self.options.follow_symlinks);

        Ok(Matches {
            inner: walker.into_iter(),
            extension: extension.clone(),
        })
    }

    /// Matching files directly inside `dir`; no recursion.
    ///
    /// Hidden files are not filtered here: a caller naming one directory
    /// explicitly sees all of its children.
    pub fn list_directory(
        &self,
        dir: &Path,
        extension: &Extension,
    ) -> Result<Vec<PathBuf>, ScanError> {
        let dir = canonical_root(dir)?;
        let entries = fs::read_dir(&dir).map_err(|e| ScanError::io(&dir, e))?;

        let mut matches = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !extension.matches_name(&entry.file_name().to_string_lossy()) {
                continue;
            }
            match entry.file_type() {
                Ok(file_type) if file_type.is_file() => matches.push(entry.path()),
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(
                        path = %entry.path().display(),
                        error = %err,
                        "skipping entry without readable file type"
                    );
                }
            }
        }
        Ok(matches)
    }
}

/// Canonicalize a scan root and require it to be a directory.
fn canonical_root(root: &Path) -> Result<PathBuf, ScanError> {
    let root = root.canonicalize().map_err(|e| ScanError::io(root, e))?;
    if !root.is_dir() {
        return Err(ScanError::NotADirectory { path: root });
    }
    Ok(root)
}

/// Lazy sequence of matching absolute file paths.
///
/// Directories never appear, even when their name matches the extension.
pub struct Matches {
    inner: DirEntryIter<((), ())>,
    extension: Extension,
}

impl Iterator for Matches {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if self
                .extension
                .matches_name(&entry.file_name().to_string_lossy())
            {
                return Some(entry.path());
            }
        }
    }
}
