use crate::common::command::{
    SnapshotDirs, diff_hunks_output, empty_dirs, hunk_dirs, stdout_of,
};
use crate::common::file::write_text;
use rstest::rstest;

#[rstest]
fn show_diff_with_hunks_for_modified_file(
    hunk_dirs: SnapshotDirs,
    diff_hunks_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = format!("--- a/1.txt\n+++ b/1.txt\n{diff_hunks_output}");

    let actual_output = stdout_of(&mut hunk_dirs.run("diff", &[]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_diff_for_line_ending_change(
    empty_dirs: SnapshotDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(empty_dirs.before.path(), "crlf.txt", "x\r\ny\r\n");
    write_text(empty_dirs.after.path(), "crlf.txt", "x\ny\n");

    let expected_output = "--- a/crlf.txt\n+++ b/crlf.txt\n@@ -1,2 +1,2 @@\n-x\n-y\n+x\n+y\n";
    let actual_output = stdout_of(&mut empty_dirs.run("diff", &[]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
