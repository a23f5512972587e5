//! Extension filter token.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use compact_str::{CompactString, format_compact};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The extension set offered by the original desktop front-end.
///
/// Callers may present this list for selection; the engine itself accepts
/// any valid token, not just members of this set.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    ".py", ".java", ".sql", ".jpeg", ".png", ".jpg", ".mp4", ".mp3", ".pdf", ".docx", ".pptx",
    ".xlsx", ".txt", ".html", ".css", ".js", ".cpp", ".c", ".jar", ".xml", ".json", ".csv",
    ".blend",
];

/// Errors from constructing an [`Extension`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtensionError {
    /// The token was empty or only a dot.
    #[error("extension token is empty")]
    Empty,

    /// The token contained a character that cannot appear in a file name.
    #[error("extension token contains '{0}'")]
    InvalidCharacter(char),
}

/// A normalized file-extension filter.
///
/// Always non-empty with a single leading dot (`.pdf`). Matching is a
/// case-sensitive suffix comparison against the final path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extension(CompactString);

impl Extension {
    /// Normalize a token into an extension.
    ///
    /// A missing leading dot is supplied (`pdf` becomes `.pdf`); extra
    /// leading dots are collapsed to one.
    pub fn new(token: &str) -> Result<Self, ExtensionError> {
        let trimmed = token.trim().trim_start_matches('.');
        if trimmed.is_empty() {
            return Err(ExtensionError::Empty);
        }
        for c in ['/', '\\', '\0'] {
            if trimmed.contains(c) {
                return Err(ExtensionError::InvalidCharacter(c));
            }
        }
        Ok(Self(format_compact!(".{trimmed}")))
    }

    /// The normalized token, including the leading dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-sensitive suffix match against a file name.
    pub fn matches_name(&self, file_name: &str) -> bool {
        file_name.ends_with(self.as_str())
    }

    /// Suffix match against a path's final component.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(self.as_str()))
            .unwrap_or(false)
    }

    /// Whether the token is one of [`KNOWN_EXTENSIONS`].
    pub fn is_known(&self) -> bool {
        KNOWN_EXTENSIONS.contains(&self.as_str())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = ExtensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
