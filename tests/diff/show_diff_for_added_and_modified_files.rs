use crate::common::command::{SnapshotDirs, appended_dirs, stdout_of};
use rstest::rstest;

#[rstest]
fn show_diff_for_added_and_modified_files(
    appended_dirs: SnapshotDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = "--- a/a.txt\n+++ b/a.txt\n@@ -1,1 +1,2 @@\n hello\n+world\n\n--- /dev/null\n+++ b/b.txt\n+new\n";

    let actual_output = stdout_of(&mut appended_dirs.run("diff", &[]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
