use crate::artifacts::diff::change_set::{ChangeSet, PathSet};
use crate::artifacts::snapshot::Snapshot;
use crate::artifacts::snapshot::content::Content;
use crate::artifacts::snapshot::snapshot_path::SnapshotPath;
use serde::Serialize;
use std::collections::BTreeMap;

pub type ContentMap = BTreeMap<SnapshotPath, Content>;

/// Changed files grouped by category, with the content that best describes
/// each change: the new content for added and modified files, the last known
/// content for deleted ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub added: ContentMap,
    pub modified: ContentMap,
    pub deleted: ContentMap,
}

impl ChangeSummary {
    pub fn from_changes(changes: &ChangeSet, before: &Snapshot, after: &Snapshot) -> Self {
        Self {
            added: collect_contents(changes.added(), after),
            modified: collect_contents(changes.modified(), after),
            deleted: collect_contents(changes.deleted(), before),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn collect_contents(paths: &PathSet, snapshot: &Snapshot) -> ContentMap {
    paths
        .iter()
        .filter_map(|path| snapshot.get(path).map(|content| (path.clone(), content.clone())))
        .collect()
}
