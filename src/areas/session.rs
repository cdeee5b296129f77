use crate::areas::snapshot_store::SnapshotStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::patch::{Patch, PatchOptions};
use crate::artifacts::snapshot::content::BinaryIdentity;
use crate::artifacts::snapshot::error::SnapshotError;
use crate::artifacts::snapshot::observation::Observation;
use std::collections::BTreeSet;

/// One before/after comparison driven by directory scans.
///
/// `begin` captures the `before` snapshot; every `rescan` folds the current
/// state of a directory into `after`. Rescanning the same workspace after it
/// was edited tracks those edits; rescanning another directory compares the
/// two trees.
#[derive(Debug)]
pub struct Session {
    store: SnapshotStore,
    identity: BinaryIdentity,
}

impl Session {
    pub fn begin(workspace: &Workspace, identity: BinaryIdentity) -> anyhow::Result<Self> {
        let before = workspace.capture(identity)?;

        Ok(Self {
            store: SnapshotStore::initialize(&before),
            identity,
        })
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Record every file of `workspace` that differs from the tracked state
    /// and every tracked file that is confirmed gone.
    ///
    /// Returns the number of recorded edits. Every path is read before any
    /// edit is recorded, so an unreadable file fails the rescan and leaves the
    /// store untouched.
    pub fn rescan(&mut self, workspace: &Workspace) -> anyhow::Result<usize> {
        let listed = workspace.list_files()?.into_iter().collect::<BTreeSet<_>>();
        let missing = self
            .store
            .after()
            .paths()
            .filter(|path| !listed.contains(*path))
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut edits = Vec::new();
        for path in listed.into_iter().chain(missing) {
            match workspace.observe(&path, self.identity) {
                Observation::Present(content) if self.store.after().get(&path) == Some(&content) => {}
                Observation::Absent if !self.store.after().contains(&path) => {}
                Observation::Unreadable(source) => {
                    return Err(SnapshotError::Unreadable {
                        path: path.to_string(),
                        source,
                    }
                    .into());
                }
                observation => edits.push((path, observation)),
            }
        }

        let count = edits.len();
        for (path, observation) in edits {
            self.store.apply(path, observation)?;
        }

        tracing::debug!(root = ?workspace.path(), edits = count, "rescanned workspace");
        Ok(count)
    }

    pub fn patch(&self, options: &PatchOptions) -> Patch {
        self.store.patch(options)
    }
}
