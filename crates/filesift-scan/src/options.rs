//! Scan configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for recursive scans.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ScanOptions {
    /// Follow symbolic links during traversal.
    ///
    /// On by default to match the original glob-style traversal. A cyclic
    /// link chain can make the walk non-terminating; callers scanning
    /// untrusted trees should turn this off.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// Skip entries whose name starts with a dot.
    ///
    /// On by default: `**` glob expansion never matched dotfiles either.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub skip_hidden: bool,

    /// Number of traversal threads (0 = default pool).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,
}

fn default_true() -> bool {
    true
}

impl ScanOptions {
    /// Create a scan options builder.
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            skip_hidden: true,
            threads: 0,
        }
    }
}
