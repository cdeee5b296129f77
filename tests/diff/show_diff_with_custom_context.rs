use crate::common::command::{SnapshotDirs, empty_dirs, stdout_of};
use crate::common::file::write_text;
use rstest::rstest;

#[rstest]
#[case("0", "@@ -3,1 +3,1 @@\n-3\n+three\n")]
#[case("1", "@@ -2,3 +2,3 @@\n 2\n-3\n+three\n 4\n")]
#[case("3", "@@ -1,5 +1,5 @@\n 1\n 2\n-3\n+three\n 4\n 5\n")]
fn show_diff_with_custom_context(
    empty_dirs: SnapshotDirs,
    #[case] unified: &str,
    #[case] expected_hunk: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_text(empty_dirs.before.path(), "n.txt", "1\n2\n3\n4\n5\n");
    write_text(empty_dirs.after.path(), "n.txt", "1\n2\nthree\n4\n5\n");

    let expected_output = format!("--- a/n.txt\n+++ b/n.txt\n{expected_hunk}");
    let actual_output = stdout_of(&mut empty_dirs.run("diff", &["-U", unified]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
