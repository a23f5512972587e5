use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use filesift_core::{Extension, FileTask, TaskKind};
use filesift_ops::{
    MatchScanner, OpKind, TaskEvent, TaskExecutor, delete_directory, delete_matching,
    move_directory, move_matching,
};

fn ext(token: &str) -> Extension {
    Extension::new(token).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_delete_reports_no_matches_not_empty_success() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("keep.png"), "x").unwrap();

    let scanner = MatchScanner::new();
    let err = delete_matching(&scanner, temp.path(), &ext(".txt")).unwrap_err();

    assert!(err.is_no_matches());
    assert!(err.to_string().contains(".txt"));
}

#[test]
fn test_delete_is_idempotent() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("a.txt"), "x").unwrap();
    fs::write(temp.path().join("sub/b.txt"), "x").unwrap();

    let scanner = MatchScanner::new();

    let report = delete_matching(&scanner, temp.path(), &ext(".txt")).unwrap();
    assert_eq!(report.kind, OpKind::Delete);
    assert_eq!(report.succeeded, 2);
    assert!(report.is_clean());

    let second = delete_matching(&scanner, temp.path(), &ext(".txt")).unwrap_err();
    assert!(second.is_no_matches());
}

#[test]
fn test_delete_leaves_other_extensions_alone() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "x").unwrap();
    fs::write(temp.path().join("b.png"), "x").unwrap();

    let scanner = MatchScanner::new();
    let report = delete_matching(&scanner, temp.path(), &ext(".txt")).unwrap();

    assert_eq!(report.succeeded, 1);
    assert_eq!(names_in(temp.path()), vec!["b.png"]);
}

#[test]
fn test_delete_directory_is_not_recursive() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("top.txt"), "x").unwrap();
    fs::write(temp.path().join("sub/nested.txt"), "x").unwrap();

    let scanner = MatchScanner::new();
    let report = delete_directory(&scanner, temp.path(), &ext(".txt")).unwrap();

    assert_eq!(report.succeeded, 1);
    assert!(temp.path().join("sub/nested.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_partial_failure_does_not_abort_the_batch() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(temp.path().join("a.txt"), "x").unwrap();
    fs::write(temp.path().join("b.txt"), "x").unwrap();
    fs::write(locked.join("stuck.txt"), "x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let scanner = MatchScanner::new();
    let report = delete_matching(&scanner, temp.path(), &ext(".txt")).unwrap();

    // Restore before asserting so the tempdir can always be cleaned up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("locked/stuck.txt"));
    assert!(!temp.path().join("a.txt").exists());
    assert!(!temp.path().join("b.txt").exists());
    assert!(locked.join("stuck.txt").exists());
}

#[test]
fn test_move_relocates_into_destination() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    let dest = temp.path().join("dst");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(source.join("a.txt"), "payload").unwrap();

    let scanner = MatchScanner::new();
    let report = move_directory(&scanner, &source, &dest, &ext(".txt"), &mut rng()).unwrap();

    assert_eq!(report.kind, OpKind::Move);
    assert_eq!(report.succeeded, 1);
    assert!(!source.join("a.txt").exists());
    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "payload");
}

#[test]
fn test_move_collision_keeps_both_files() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    let dest = temp.path().join("dst");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(source.join("a.txt"), "incoming").unwrap();
    fs::write(dest.join("a.txt"), "original").unwrap();

    let scanner = MatchScanner::new();
    let report = move_directory(&scanner, &source, &dest, &ext(".txt"), &mut rng()).unwrap();

    assert_eq!(report.succeeded, 1);
    assert!(report.is_clean());
    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "original");

    let salted: Vec<String> = names_in(&dest)
        .into_iter()
        .filter(|n| n.starts_with("a_") && n.ends_with(".txt"))
        .collect();
    assert_eq!(salted.len(), 1);
    let salt: u32 = salted[0]
        .strip_prefix("a_")
        .and_then(|s| s.strip_suffix(".txt"))
        .unwrap()
        .parse()
        .unwrap();
    assert!((1..=100).contains(&salt));
    assert_eq!(
        fs::read_to_string(dest.join(&salted[0])).unwrap(),
        "incoming"
    );
}

#[test]
fn test_move_same_folder_is_a_noop() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "x").unwrap();
    fs::write(temp.path().join("b.txt"), "x").unwrap();

    let scanner = MatchScanner::new();
    let report =
        move_directory(&scanner, temp.path(), temp.path(), &ext(".txt"), &mut rng()).unwrap();

    assert_eq!(report.succeeded, 0);
    assert_eq!(report.skipped, 2);
    assert!(report.failures.is_empty());
    assert_eq!(names_in(temp.path()), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_move_scope_distinction() {
    let scanner = MatchScanner::new();

    // Directory-scoped: the nested match stays put.
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dst");
    fs::create_dir_all(temp.path().join("root/sub")).unwrap();
    fs::write(temp.path().join("root/top.txt"), "x").unwrap();
    fs::write(temp.path().join("root/sub/nested.txt"), "x").unwrap();

    let report = move_directory(
        &scanner,
        &temp.path().join("root"),
        &dest,
        &ext(".txt"),
        &mut rng(),
    )
    .unwrap();
    assert_eq!(report.succeeded, 1);
    assert!(temp.path().join("root/sub/nested.txt").exists());
    assert!(dest.join("top.txt").exists());

    // Recursive: the nested match is relocated too.
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dst");
    fs::create_dir_all(temp.path().join("root/sub")).unwrap();
    fs::write(temp.path().join("root/top.txt"), "x").unwrap();
    fs::write(temp.path().join("root/sub/nested.txt"), "x").unwrap();

    let report = move_matching(
        &scanner,
        &temp.path().join("root"),
        &dest,
        &ext(".txt"),
        &mut rng(),
    )
    .unwrap();
    assert_eq!(report.succeeded, 2);
    assert!(!temp.path().join("root/sub/nested.txt").exists());
    assert!(dest.join("top.txt").exists());
    assert!(dest.join("nested.txt").exists());
}

#[test]
fn test_move_creates_missing_destination() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    let dest = temp.path().join("brand/new/dst");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), "x").unwrap();

    let scanner = MatchScanner::new();
    let report = move_directory(&scanner, &source, &dest, &ext(".txt"), &mut rng()).unwrap();

    assert_eq!(report.succeeded, 1);
    assert!(dest.join("a.txt").exists());
}

#[test]
fn test_move_reports_no_matches() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dst");

    let scanner = MatchScanner::new();
    let err = move_matching(&scanner, temp.path(), &dest, &ext(".txt"), &mut rng()).unwrap_err();

    assert!(err.is_no_matches());
    // The destination is only prepared once there is something to move.
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_executor_delivers_one_completed_event() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "x").unwrap();

    let executor = TaskExecutor::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let task = FileTask::delete(ext(".txt"), temp.path());

    executor.submit(task, tx).await.unwrap();

    match rx.recv().await {
        Some(TaskEvent::Completed(report)) => {
            assert_eq!(report.succeeded, 1);
            assert!(report.is_clean());
        }
        other => panic!("expected Completed, got {:?}", other),
    }
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_executor_routes_no_matches_separately() {
    let temp = TempDir::new().unwrap();

    let executor = TaskExecutor::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let task = FileTask::delete(ext(".pdf"), temp.path());

    executor.submit(task, tx).await.unwrap();

    match rx.recv().await {
        Some(TaskEvent::NoMatches(message)) => assert!(message.contains(".pdf")),
        other => panic!("expected NoMatches, got {:?}", other),
    }
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_executor_reports_bad_root_as_error() {
    let executor = TaskExecutor::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let task = FileTask::delete(ext(".txt"), "/definitely/not/here");

    executor.submit(task, tx).await.unwrap();

    match rx.recv().await {
        Some(TaskEvent::Failed(message)) => assert!(message.contains("not found")),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_executor_rejects_move_without_destination() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "x").unwrap();

    let executor = TaskExecutor::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let task = FileTask {
        kind: TaskKind::Move,
        extension: ext(".txt"),
        scan_root: temp.path().to_path_buf(),
        destination: None,
    };

    executor.submit(task, tx).await.unwrap();

    match rx.recv().await {
        Some(TaskEvent::Failed(message)) => assert!(message.contains("destination")),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(temp.path().join("a.txt").exists());
}
