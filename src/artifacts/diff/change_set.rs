use crate::artifacts::snapshot::Snapshot;
use crate::artifacts::snapshot::snapshot_path::SnapshotPath;
use bitflags::bitflags;
use std::collections::BTreeSet;
use std::str::FromStr;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const DELETED = 0b0010;
        const MODIFIED = 0b0100;
    }
}

impl DiffFilter {
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'D' => filter |= Self::DELETED,
                'M' => filter |= Self::MODIFIED,
                _ => return None,
            }
        }

        Some(filter)
    }
}

impl Default for DiffFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for DiffFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
            .ok_or_else(|| anyhow::anyhow!("invalid diff filter '{s}', expected letters from 'AMD'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Deleted,
    Modified,
    Added,
}

impl ChangeType {
    pub fn matches_filter(&self, filter: DiffFilter) -> bool {
        match self {
            ChangeType::Added => filter.contains(DiffFilter::ADDED),
            ChangeType::Deleted => filter.contains(DiffFilter::DELETED),
            ChangeType::Modified => filter.contains(DiffFilter::MODIFIED),
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            ChangeType::Added => 'A',
            ChangeType::Deleted => 'D',
            ChangeType::Modified => 'M',
        }
    }
}

pub type PathSet = BTreeSet<SnapshotPath>;

/// Partition of the paths of two snapshots.
///
/// The three sets are disjoint; paths present in neither are unchanged. Sets
/// are ordered, so iterating them yields paths in lexicographic order no
/// matter how the snapshots were populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    added: PathSet,
    modified: PathSet,
    deleted: PathSet,
}

impl ChangeSet {
    pub fn classify(before: &Snapshot, after: &Snapshot) -> Self {
        let mut change_set = ChangeSet::default();

        for (path, content) in before.iter() {
            match after.get(path) {
                None => {
                    change_set.deleted.insert(path.clone());
                }
                Some(other) if other != content => {
                    change_set.modified.insert(path.clone());
                }
                Some(_) => {}
            }
        }

        change_set.added = after
            .paths()
            .filter(|path| !before.contains(path))
            .cloned()
            .collect();

        tracing::debug!(
            added = change_set.added.len(),
            modified = change_set.modified.len(),
            deleted = change_set.deleted.len(),
            "classified snapshot changes"
        );

        change_set
    }

    pub fn added(&self) -> &PathSet {
        &self.added
    }

    pub fn modified(&self) -> &PathSet {
        &self.modified
    }

    pub fn deleted(&self) -> &PathSet {
        &self.deleted
    }

    pub fn change_type(&self, path: &SnapshotPath) -> Option<ChangeType> {
        if self.added.contains(path) {
            Some(ChangeType::Added)
        } else if self.modified.contains(path) {
            Some(ChangeType::Modified)
        } else if self.deleted.contains(path) {
            Some(ChangeType::Deleted)
        } else {
            None
        }
    }

    /// All changed paths in patch order: deleted, then modified, then added,
    /// each group sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&SnapshotPath, ChangeType)> {
        tagged(&self.deleted, ChangeType::Deleted)
            .chain(tagged(&self.modified, ChangeType::Modified))
            .chain(tagged(&self.added, ChangeType::Added))
    }

    /// Keep only the categories selected by `filter`.
    pub fn filter(mut self, filter: DiffFilter) -> Self {
        for change in [ChangeType::Deleted, ChangeType::Modified, ChangeType::Added] {
            if !change.matches_filter(filter) {
                self.paths_mut(change).clear();
            }
        }
        self
    }

    fn paths_mut(&mut self, change: ChangeType) -> &mut PathSet {
        match change {
            ChangeType::Added => &mut self.added,
            ChangeType::Modified => &mut self.modified,
            ChangeType::Deleted => &mut self.deleted,
        }
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn tagged(set: &PathSet, change: ChangeType) -> impl Iterator<Item = (&SnapshotPath, ChangeType)> {
    set.iter().map(move |path| (path, change))
}

/// Free-function form of [`ChangeSet::classify`].
pub fn classify(before: &Snapshot, after: &Snapshot) -> ChangeSet {
    ChangeSet::classify(before, after)
}
