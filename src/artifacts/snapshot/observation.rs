use crate::artifacts::snapshot::content::Content;
use std::io;

/// Result of looking at one path after edits were made.
///
/// Only `Absent` may turn into a deletion; a failed read is never mistaken
/// for a removed file.
#[derive(Debug)]
pub enum Observation {
    Present(Content),
    Absent,
    Unreadable(io::Error),
}

impl Observation {
    pub fn from_read(result: io::Result<Content>) -> Self {
        match result {
            Ok(content) => Observation::Present(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Observation::Absent,
            Err(err) => Observation::Unreadable(err),
        }
    }
}
