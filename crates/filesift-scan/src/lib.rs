//! File discovery for filesift.
//!
//! This crate finds the candidate files a bulk operation will act on:
//! every file under a root whose name ends with a given extension.
//!
//! # Overview
//!
//! Two enumeration shapes are exposed, matching the two operation scopes:
//!
//! - **Recursive**: [`MatchScanner::scan`] walks the whole tree under the
//!   root (jwalk-backed, traversal parallelized) and yields matches lazily.
//! - **Direct children**: [`MatchScanner::list_directory`] looks only at the
//!   immediate entries of one directory.
//!
//! Both fail only when the root itself is missing, unreadable, or not a
//! directory. Unreadable entries deeper in the tree are skipped and the
//! scan degrades silently.
//!
//! # Example
//!
//! ```rust,no_run
//! use filesift_scan::{Extension, MatchScanner};
//!
//! let scanner = MatchScanner::new();
//! let ext = Extension::new(".pdf").unwrap();
//! for path in scanner.scan("/home/user".as_ref(), &ext).unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

mod options;
mod scanner;

pub use options::{ScanOptions, ScanOptionsBuilder};
pub use scanner::{Matches, MatchScanner};

// Re-export core types for convenience
pub use filesift_core::{Extension, ScanError};
