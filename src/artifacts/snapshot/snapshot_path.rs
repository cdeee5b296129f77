use crate::artifacts::snapshot::INVALID_PATH_CHARS_REGEX;
use crate::artifacts::snapshot::error::SnapshotError;
use serde::Serialize;
use std::sync::LazyLock;

static INVALID_PATH_CHARS: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(INVALID_PATH_CHARS_REGEX).expect("path character regex is valid")
});

/// Normalized, repo-relative file path.
///
/// Segments are always joined with `/`, never start with `/`, and contain no
/// `.` or `..` segments. Ordering is plain lexicographic order of the
/// normalized string, which is the order paths appear in a rendered patch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SnapshotPath(String);

impl SnapshotPath {
    pub fn try_parse(raw: &str) -> Result<Self, SnapshotError> {
        let invalid = |reason: &str| SnapshotError::InvalidPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        if INVALID_PATH_CHARS.is_match(raw) {
            return Err(invalid("contains control characters"));
        }

        let unified = raw.replace('\\', "/");
        if unified.starts_with('/') || has_drive_prefix(&unified) {
            return Err(invalid("path must be relative"));
        }

        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(invalid("parent directory segments are not allowed")),
                segment => segments.push(segment),
            }
        }

        if segments.is_empty() {
            return Err(invalid("path is empty"));
        }

        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether any segment is hidden (starts with a dot).
    pub fn is_hidden(&self) -> bool {
        self.0.split('/').any(|segment| segment.starts_with('.'))
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl TryFrom<&str> for SnapshotPath {
    type Error = SnapshotError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::try_parse(raw)
    }
}

impl AsRef<str> for SnapshotPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SnapshotPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
