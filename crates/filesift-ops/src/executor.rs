//! Background task execution with a single terminal callback.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use filesift_core::{FileTask, TaskKind};
use filesift_scan::{MatchScanner, ScanOptions};

use crate::delete_op::delete_matching;
use crate::error::TaskError;
use crate::move_op::move_matching;
use crate::report::OperationReport;

/// Receives the terminal outcome of a submitted task.
///
/// Exactly one of the three methods is called per task, once, after every
/// candidate file has been attempted. There are no progress callbacks.
pub trait TaskObserver: Send + 'static {
    /// The batch ran to the end; the report may still carry failures.
    fn on_completed(&self, report: OperationReport);
    /// The scan found nothing to act on. Informational, not a failure.
    fn on_no_matches(&self, message: String);
    /// The task died before touching any file.
    fn on_error(&self, message: String);
}

/// Terminal event of a task, for channel-based observers.
#[derive(Debug)]
pub enum TaskEvent {
    Completed(OperationReport),
    NoMatches(String),
    Failed(String),
}

/// An unbounded sender is an observer: each callback becomes one event.
/// Send failures are ignored; a dropped receiver means nobody is listening.
impl TaskObserver for mpsc::UnboundedSender<TaskEvent> {
    fn on_completed(&self, report: OperationReport) {
        let _ = self.send(TaskEvent::Completed(report));
    }

    fn on_no_matches(&self, message: String) {
        let _ = self.send(TaskEvent::NoMatches(message));
    }

    fn on_error(&self, message: String) {
        let _ = self.send(TaskEvent::Failed(message));
    }
}

/// Runs submitted tasks off the caller's thread.
///
/// Each [`submit`](Self::submit) spawns an independent blocking worker;
/// tasks are never queued, serialized, or coordinated with each other.
/// Two tasks over overlapping trees race at the filesystem level, and the
/// loser's syscall error surfaces as a per-file failure. A submitted task
/// always runs to completion; there is no cancellation.
#[derive(Debug, Clone, Default)]
pub struct TaskExecutor {
    options: ScanOptions,
}

impl TaskExecutor {
    /// Create an executor with default scan options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor with explicit scan options.
    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Run `task` on its own blocking worker and deliver its terminal
    /// outcome to `observer`.
    ///
    /// Must be called within a tokio runtime. The returned handle resolves
    /// after the observer has been notified; callers that only care about
    /// the callback may drop it.
    pub fn submit<O: TaskObserver>(&self, task: FileTask, observer: O) -> JoinHandle<()> {
        let scanner = MatchScanner::with_options(self.options.clone());

        tokio::task::spawn_blocking(move || {
            tracing::debug!(kind = %task.kind, root = %task.scan_root.display(), "task started");
            match run_task(&scanner, &task) {
                Ok(report) => observer.on_completed(report),
                Err(err) if err.is_no_matches() => observer.on_no_matches(err.to_string()),
                Err(err) => observer.on_error(err.to_string()),
            }
        })
    }
}

fn run_task(scanner: &MatchScanner, task: &FileTask) -> Result<OperationReport, TaskError> {
    match task.kind {
        TaskKind::Delete => delete_matching(scanner, &task.scan_root, &task.extension),
        TaskKind::Move => {
            let destination = task
                .destination
                .as_deref()
                .ok_or(TaskError::MissingDestination)?;
            move_matching(
                scanner,
                &task.scan_root,
                destination,
                &task.extension,
                &mut rand::thread_rng(),
            )
        }
    }
}
