use crate::common::command::{SnapshotDirs, empty_dirs, run_snapdiff_command, stdout_of};
use crate::common::file::{write_generated_files, write_text};
use rstest::rstest;

#[rstest]
#[case("diff")]
#[case("status")]
fn show_nothing_for_identical_directories(
    empty_dirs: SnapshotDirs,
    #[case] command: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_generated_files(empty_dirs.before.path(), "f", 4);
    write_text(empty_dirs.before.path(), "nested/dir/file.txt", "same\n");

    let dir = empty_dirs.before.path();
    let actual_output = stdout_of(&mut run_snapdiff_command(dir, dir, &[command]))?;

    pretty_assertions::assert_eq!(actual_output, "");

    Ok(())
}

#[rstest]
fn hidden_files_are_ignored(empty_dirs: SnapshotDirs) -> Result<(), Box<dyn std::error::Error>> {
    write_text(empty_dirs.before.path(), ".env", "A=1\n");
    write_text(empty_dirs.after.path(), ".env", "A=2\n");
    write_text(empty_dirs.after.path(), "cache/.lock", "1\n");

    let actual_output = stdout_of(&mut empty_dirs.run("status", &[]))?;

    pretty_assertions::assert_eq!(actual_output, "");

    Ok(())
}
