use crate::common::command::{SnapshotDirs, empty_dirs, run_snapdiff_command};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_missing_before_directory(empty_dirs: SnapshotDirs) {
    let missing = empty_dirs.before.path().join("does-not-exist");

    run_snapdiff_command(&missing, empty_dirs.after.path(), &["diff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open directory"));
}

#[rstest]
fn reject_file_instead_of_directory(empty_dirs: SnapshotDirs) {
    let file = empty_dirs.after.path().join("plain.txt");
    std::fs::write(&file, "plain").unwrap();

    run_snapdiff_command(empty_dirs.before.path(), &file, &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[rstest]
#[case(&["--diff-filter", "X"], "invalid diff filter")]
#[case(&["--binary", "hash"], "invalid binary identity")]
fn reject_invalid_options(
    empty_dirs: SnapshotDirs,
    #[case] options: &[&str],
    #[case] message: &str,
) {
    empty_dirs
        .run("diff", options)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}
