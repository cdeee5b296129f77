use crate::artifacts::snapshot::BINARY_PLACEHOLDER;
use serde::{Serialize, Serializer};
use sha1::{Digest, Sha1};
use std::str::FromStr;

/// How undecodable file bytes are represented in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryIdentity {
    /// Every binary file maps to the same marker, so binary-to-binary edits
    /// are not detected.
    #[default]
    Marker,
    /// The marker carries the SHA-1 of the raw bytes.
    Digest,
}

impl FromStr for BinaryIdentity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marker" => Ok(BinaryIdentity::Marker),
            "digest" => Ok(BinaryIdentity::Digest),
            _ => anyhow::bail!("invalid binary identity '{s}', expected 'marker' or 'digest'"),
        }
    }
}

/// File content as seen by the diff engine.
///
/// Binary content is never diffed line by line; it is only compared by
/// equality and rendered as [`BINARY_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    Text(String),
    Binary { digest: Option<String> },
}

impl Content {
    pub fn binary() -> Self {
        Content::Binary { digest: None }
    }

    /// Decode raw file bytes, falling back to a binary marker when they are
    /// not valid UTF-8.
    pub fn from_bytes(bytes: Vec<u8>, identity: BinaryIdentity) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Content::Text(text),
            Err(err) => match identity {
                BinaryIdentity::Marker => Content::binary(),
                BinaryIdentity::Digest => {
                    let mut hasher = Sha1::new();
                    hasher.update(err.as_bytes());
                    Content::Binary {
                        digest: Some(format!("{:x}", hasher.finalize())),
                    }
                }
            },
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Content::Binary { .. })
    }

    /// Text used when this content is written into a patch or summary.
    pub fn display_text(&self) -> &str {
        match self {
            Content::Text(text) => text,
            Content::Binary { .. } => BINARY_PLACEHOLDER,
        }
    }

    /// Units compared by the line diff: every line keeps its terminator, so
    /// a changed or missing line ending is a changed line. Binary content is
    /// a single unit carrying its identity.
    pub fn lines(&self) -> Vec<ContentLine<'_>> {
        match self {
            Content::Text(text) => text.split_inclusive('\n').map(ContentLine::text).collect(),
            Content::Binary { digest } => vec![ContentLine {
                raw: digest.as_deref().unwrap_or_default(),
                shown: BINARY_PLACEHOLDER,
            }],
        }
    }
}

/// A line as compared (`raw`, terminator included) and as rendered (`shown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'c> {
    raw: &'c str,
    shown: &'c str,
}

impl<'c> ContentLine<'c> {
    pub fn text(raw: &'c str) -> Self {
        let shown = match raw.strip_suffix('\n') {
            Some(line) => line.strip_suffix('\r').unwrap_or(line),
            None => raw,
        };

        Self { raw, shown }
    }

    pub fn raw(&self) -> &'c str {
        self.raw
    }

    pub fn shown(&self) -> &'c str {
        self.shown
    }
}

impl From<ContentLine<'_>> for String {
    fn from(line: ContentLine<'_>) -> Self {
        line.shown.to_string()
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl Serialize for Content {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_text())
    }
}
