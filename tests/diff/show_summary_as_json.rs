use crate::common::command::{SnapshotDirs, appended_dirs, mixed_dirs, stdout_of};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn show_summary_as_json(appended_dirs: SnapshotDirs) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut appended_dirs.run("summary", &[]))?;
    let summary: serde_json::Value = serde_json::from_str(&actual_output)?;

    pretty_assertions::assert_eq!(
        summary,
        json!({
            "added": { "b.txt": "new\n" },
            "modified": { "a.txt": "hello\nworld\n" },
            "deleted": {}
        })
    );

    Ok(())
}

#[rstest]
fn summary_keeps_previous_content_of_deleted_files(
    mixed_dirs: SnapshotDirs,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut mixed_dirs.run("summary", &[]))?;
    let summary: serde_json::Value = serde_json::from_str(&actual_output)?;

    pretty_assertions::assert_eq!(summary["deleted"], json!({ "docs/old.md": "# old\n" }));
    pretty_assertions::assert_eq!(
        summary["modified"],
        json!({ "src/lib.rs": "pub mod a;\npub mod c;\n" })
    );

    Ok(())
}
