//! filesift - bulk delete and relocate files by extension.
//!
//! Usage:
//!   sift delete EXT ROOT           Delete every match under ROOT (recursive)
//!   sift delete-dir EXT DIR        Delete matching files directly in DIR
//!   sift move EXT ROOT DEST        Move every match under ROOT into DEST (recursive)
//!   sift move-dir EXT SOURCE DEST  Move matching files directly in SOURCE into DEST
//!   sift extensions                List the well-known extension set
//!   sift --help                    Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};

use filesift_core::{Extension, FileTask, KNOWN_EXTENSIONS};
use filesift_ops::{
    MatchScanner, OperationReport, TaskEvent, TaskExecutor, delete_directory, move_directory,
};

#[derive(Parser)]
#[command(
    name = "filesift",
    version,
    about = "Bulk delete and relocate files by extension",
    long_about = "filesift finds every file matching an extension under a root you name \
                  explicitly, then deletes them or moves them into a destination folder. \
                  Deletions are permanent; there is no trash and no undo."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Delete every matching file under a root, recursively
    Delete {
        /// Extension to match (e.g. ".pdf"; the dot is optional)
        extension: Extension,

        /// Root to scan; pass / deliberately for a whole-filesystem sweep
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete matching files directly inside one directory (no recursion)
    DeleteDir {
        /// Extension to match
        extension: Extension,

        /// Directory whose direct children are considered
        dir: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Move every matching file under a root into a destination, recursively
    Move {
        /// Extension to match
        extension: Extension,

        /// Root to scan
        root: PathBuf,

        /// Destination directory (created if missing)
        dest: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Move matching files directly inside a source directory (no recursion)
    MoveDir {
        /// Extension to match
        extension: Extension,

        /// Source directory whose direct children are considered
        source: PathBuf,

        /// Destination directory (created if missing)
        dest: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the well-known extension set
    Extensions,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Delete {
            extension,
            root,
            format,
        } => {
            let task = FileTask::delete(extension, root);
            run_background(task, format).await
        }
        Command::Move {
            extension,
            root,
            dest,
            format,
        } => {
            let task = FileTask::move_to(extension, root, dest);
            run_background(task, format).await
        }
        Command::DeleteDir {
            extension,
            dir,
            format,
        } => {
            let scanner = MatchScanner::new();
            report_outcome(delete_directory(&scanner, &dir, &extension), format)
        }
        Command::MoveDir {
            extension,
            source,
            dest,
            format,
        } => {
            let scanner = MatchScanner::new();
            report_outcome(
                move_directory(
                    &scanner,
                    &source,
                    &dest,
                    &extension,
                    &mut rand::thread_rng(),
                ),
                format,
            )
        }
        Command::Extensions => {
            for ext in KNOWN_EXTENSIONS {
                println!("{ext}");
            }
            Ok(())
        }
    }
}

/// Submit a whole-scope task and wait for its single terminal event.
async fn run_background(task: FileTask, format: OutputFormat) -> Result<()> {
    let executor = TaskExecutor::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let _worker = executor.submit(task, tx);

    match rx.recv().await {
        Some(TaskEvent::Completed(report)) => print_report(&report, format),
        Some(TaskEvent::NoMatches(message)) => {
            println!("{message}");
            Ok(())
        }
        Some(TaskEvent::Failed(message)) => Err(eyre!(message)),
        None => Err(eyre!("task worker ended without reporting")),
    }
}

fn report_outcome(
    result: std::result::Result<OperationReport, filesift_ops::TaskError>,
    format: OutputFormat,
) -> Result<()> {
    match result {
        Ok(report) => print_report(&report, format),
        Err(err) if err.is_no_matches() => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_report(report: &OperationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", report.summary());
            if report.skipped > 0 {
                println!("{} already in place, skipped", report.skipped);
            }
            for failure in &report.failures {
                eprintln!("  failed: {failure}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
