use crate::artifacts::snapshot::Snapshot;
use crate::artifacts::snapshot::content::{BinaryIdentity, Content};
use crate::artifacts::snapshot::observation::Observation;
use crate::artifacts::snapshot::snapshot_path::SnapshotPath;
use anyhow::Context;
use std::path::Path;
use walkdir::WalkDir;

/// A directory tree read into snapshots.
///
/// Hidden entries (any path segment starting with `.`) are never listed.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list_files(&self) -> anyhow::Result<Vec<SnapshotPath>> {
        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(1) {
            let entry = entry.with_context(|| format!("Failed to walk {:?}", self.path))?;
            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(path) = self.to_snapshot_path(entry.path())? {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Map a walked file to its snapshot path.
    ///
    /// Hidden files are skipped, and so are names a snapshot cannot hold
    /// (not UTF-8, control characters); those are reported with a warning.
    fn to_snapshot_path(&self, path: &Path) -> anyhow::Result<Option<SnapshotPath>> {
        let relative = path
            .strip_prefix(&self.path)
            .with_context(|| format!("{:?} is outside of {:?}", path, self.path))?;

        let Some(relative) = relative.to_str() else {
            tracing::warn!(path = ?relative, "skipping file with a non UTF-8 name");
            return Ok(None);
        };

        match SnapshotPath::try_parse(relative) {
            Ok(snapshot_path) if snapshot_path.is_hidden() => Ok(None),
            Ok(snapshot_path) => Ok(Some(snapshot_path)),
            Err(err) => {
                tracing::warn!(%err, "skipping file");
                Ok(None)
            }
        }
    }

    /// Read `path` and classify the outcome without failing.
    pub fn observe(&self, path: &SnapshotPath, identity: BinaryIdentity) -> Observation {
        let full_path = self.path.join(path.as_str());

        match std::fs::metadata(&full_path) {
            Ok(metadata) if !metadata.is_file() => return Observation::Absent,
            Ok(_) => {}
            Err(err) => return Observation::from_read(Err(err)),
        }

        Observation::from_read(
            std::fs::read(&full_path).map(|bytes| Content::from_bytes(bytes, identity)),
        )
    }

    /// Read every listed file into a snapshot.
    pub fn capture(&self, identity: BinaryIdentity) -> anyhow::Result<Snapshot> {
        let mut files = Vec::new();

        for path in self.list_files()? {
            match self.observe(&path, identity) {
                Observation::Present(content) => files.push((path, content)),
                // removed between listing and reading
                Observation::Absent => continue,
                Observation::Unreadable(err) => {
                    return Err(err).with_context(|| format!("Failed to read file: {}", path));
                }
            }
        }

        tracing::debug!(root = ?self.path, files = files.len(), "captured workspace snapshot");
        Ok(files.into_iter().collect())
    }
}
