use crate::common::command::{SnapshotDirs, empty_dirs, stdout_of};
use crate::common::file::{delete_path, write_text};
use rstest::rstest;

#[rstest]
fn show_diff_for_deleted_file(empty_dirs: SnapshotDirs) -> Result<(), Box<dyn std::error::Error>> {
    write_text(empty_dirs.before.path(), "x.txt", "1\n2\n3\n");
    write_text(empty_dirs.after.path(), "x.txt", "1\n2\n3\n");
    delete_path(&empty_dirs.after.path().join("x.txt"));

    let expected_output = "--- a/x.txt\n+++ /dev/null\n-1\n-2\n-3\n";
    let actual_output = stdout_of(&mut empty_dirs.run("diff", &[]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_diff_for_deleted_directory(
    empty_dirs: SnapshotDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(empty_dirs.before.path(), "a/b/3.txt", "three");
    write_text(empty_dirs.before.path(), "a/2.txt", "two");
    write_text(empty_dirs.before.path(), "1.txt", "one");
    write_text(empty_dirs.after.path(), "1.txt", "one");

    let expected_output =
        "--- a/a/2.txt\n+++ /dev/null\n-two\n\n--- a/a/b/3.txt\n+++ /dev/null\n-three\n";
    let actual_output = stdout_of(&mut empty_dirs.run("diff", &[]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
