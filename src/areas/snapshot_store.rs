use crate::artifacts::diff::change_set::ChangeSet;
use crate::artifacts::patch::{Patch, PatchOptions, assemble_with};
use crate::artifacts::snapshot::Snapshot;
use crate::artifacts::snapshot::content::Content;
use crate::artifacts::snapshot::error::SnapshotError;
use crate::artifacts::snapshot::observation::Observation;
use crate::artifacts::snapshot::snapshot_path::SnapshotPath;

/// The `before` and `after` snapshots of one tracking session.
///
/// `before` is fixed once the store is initialized. `after` starts as an
/// independent copy and is edited through [`SnapshotStore::record_change`]
/// and [`SnapshotStore::record_deletion`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotStore {
    before: Snapshot,
    after: Snapshot,
}

impl SnapshotStore {
    pub fn initialize(before: &Snapshot) -> Self {
        Self {
            before: before.clone(),
            after: before.clone(),
        }
    }

    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    pub fn after(&self) -> &Snapshot {
        &self.after
    }

    pub fn record_change(&mut self, path: SnapshotPath, content: Content) {
        self.after.insert(path, content);
    }

    pub fn record_deletion(&mut self, path: &SnapshotPath) {
        self.after.remove(path);
    }

    /// Feed the outcome of re-reading `path` into the store.
    ///
    /// An unreadable file is reported back to the caller and leaves `after`
    /// untouched.
    pub fn apply(
        &mut self,
        path: SnapshotPath,
        observation: Observation,
    ) -> Result<(), SnapshotError> {
        match observation {
            Observation::Present(content) => self.record_change(path, content),
            Observation::Absent => self.record_deletion(&path),
            Observation::Unreadable(source) => {
                return Err(SnapshotError::Unreadable {
                    path: path.to_string(),
                    source,
                });
            }
        }

        Ok(())
    }

    pub fn changes(&self) -> ChangeSet {
        ChangeSet::classify(&self.before, &self.after)
    }

    pub fn patch(&self, options: &PatchOptions) -> Patch {
        assemble_with(&self.before, &self.after, options)
    }
}
