use crate::common::command::{SnapshotDirs, empty_dirs, mixed_dirs, stdout_of};
use crate::common::file::write_generated_files;
use rstest::rstest;

#[rstest]
fn show_name_status_for_changed_files(
    mixed_dirs: SnapshotDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = "D\tdocs/old.md\nM\tsrc/lib.rs\nA\tsrc/c.rs\n";

    let actual_output = stdout_of(&mut mixed_dirs.run("status", &[]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_name_status_for_generated_files(
    empty_dirs: SnapshotDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    let deleted = write_generated_files(empty_dirs.before.path(), "d", 3);
    let added = write_generated_files(empty_dirs.after.path(), "a", 3);

    let expected_output = deleted
        .iter()
        .map(|name| format!("D\t{name}\n"))
        .chain(added.iter().map(|name| format!("A\t{name}\n")))
        .collect::<String>();
    let actual_output = stdout_of(&mut empty_dirs.run("status", &[]))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
