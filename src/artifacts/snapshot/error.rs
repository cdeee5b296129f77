use std::io;

/// Failures raised while building snapshots or feeding edits into a store.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("path '{path}' appears more than once after normalization")]
    DuplicatePath { path: String },

    #[error("failed to read '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}
