//! Core types for filesift.
//!
//! This crate provides the shared vocabulary of the filesift engine:
//! the extension filter, the task description submitted by callers,
//! and the fatal scan-level error type. It performs no filesystem access.

mod error;
mod extension;
mod task;

pub use error::ScanError;
pub use extension::{Extension, ExtensionError, KNOWN_EXTENSIONS};
pub use task::{FileTask, TaskKind};
