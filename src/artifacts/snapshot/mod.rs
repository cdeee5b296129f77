//! In-memory file snapshots
//!
//! A snapshot maps normalized repo-relative paths to file content. Two of them
//! (`before` and `after`) are compared to produce a change set and a patch.
//!
//! ## Components
//!
//! - `content`: Text content or an opaque marker for undecodable bytes
//! - `error`: Typed failures raised while building snapshots
//! - `observation`: Outcome of reading a single path from a workspace
//! - `snapshot_path`: Validated, normalized repo-relative paths

pub mod content;
pub mod error;
pub mod observation;
pub mod snapshot_path;

use crate::artifacts::snapshot::content::Content;
use crate::artifacts::snapshot::error::SnapshotError;
use crate::artifacts::snapshot::snapshot_path::SnapshotPath;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

pub const BINARY_PLACEHOLDER: &str = "[Binary file]";
pub const INVALID_PATH_CHARS_REGEX: &str = r"[\x00-\x1f\x7f]";

/// Path to content mapping captured at one point in time.
///
/// Iteration order is unspecified; consumers that render output sort paths
/// explicitly (see [`crate::artifacts::diff::change_set::ChangeSet`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    files: HashMap<SnapshotPath, Content>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from raw `(path, content)` pairs.
    ///
    /// Fails on the first path that does not parse, or when two raw paths
    /// normalize to the same snapshot path.
    pub fn try_from_entries<I, S>(entries: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = (S, Content)>,
        S: AsRef<str>,
    {
        let mut files = HashMap::new();

        for (raw, content) in entries {
            let path = SnapshotPath::try_parse(raw.as_ref())?;
            match files.entry(path) {
                Entry::Occupied(entry) => {
                    return Err(SnapshotError::DuplicatePath {
                        path: entry.key().to_string(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(content);
                }
            }
        }

        Ok(Self { files })
    }

    pub fn get(&self, path: &SnapshotPath) -> Option<&Content> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &SnapshotPath) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &SnapshotPath> {
        self.files.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SnapshotPath, &Content)> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn insert(&mut self, path: SnapshotPath, content: Content) -> Option<Content> {
        self.files.insert(path, content)
    }

    pub(crate) fn remove(&mut self, path: &SnapshotPath) -> Option<Content> {
        self.files.remove(path)
    }
}

impl FromIterator<(SnapshotPath, Content)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (SnapshotPath, Content)>>(iter: T) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
