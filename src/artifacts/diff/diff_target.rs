use crate::artifacts::snapshot::Snapshot;
use crate::artifacts::snapshot::content::{Content, ContentLine};
use crate::artifacts::snapshot::snapshot_path::SnapshotPath;
use derive_new::new;

const NULL_PATH: &str = "/dev/null";

/// One side of a file comparison.
///
/// A target without content stands for a file that does not exist on that
/// side and is shown as `/dev/null` in the file header.
#[derive(Debug, Clone, new)]
pub struct DiffTarget<'d> {
    pub(crate) path: &'d SnapshotPath,
    pub(crate) content: Option<&'d Content>,
}

impl<'d> DiffTarget<'d> {
    pub fn from_snapshot(path: &'d SnapshotPath, snapshot: &'d Snapshot) -> Self {
        Self {
            path,
            content: snapshot.get(path),
        }
    }

    pub fn from_nothing(path: &'d SnapshotPath) -> Self {
        Self {
            path,
            content: None,
        }
    }

    pub fn exists(&self) -> bool {
        self.content.is_some()
    }

    /// Path as written after `---`/`+++`, using `prefix` (`a` or `b`).
    pub fn diff_path(&self, prefix: &str) -> String {
        if self.exists() {
            format!("{}/{}", prefix, self.path)
        } else {
            NULL_PATH.to_string()
        }
    }

    pub fn lines(&self) -> Vec<ContentLine<'d>> {
        self.content.map(Content::lines).unwrap_or_default()
    }
}
