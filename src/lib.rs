//! Snapshot diffing and patch generation
//!
//! `snapdiff` compares two path to content snapshots and renders the result
//! as a unified patch plus a structured summary of added, modified and
//! deleted files.
//!
//! - `artifacts`: The pure engine (snapshots, classification, Myers diff,
//!   patch assembly)
//! - `areas`: Stateful pieces (snapshot store, workspace reader, sessions)
//! - `commands`: Porcelain commands used by the `snapdiff` binary
//!
//! ```
//! use snapdiff::artifacts::patch::assemble;
//! use snapdiff::artifacts::snapshot::Snapshot;
//! use snapdiff::artifacts::snapshot::content::Content;
//!
//! let before = Snapshot::try_from_entries([("a.txt", Content::from("hello\n"))]).unwrap();
//! let after = Snapshot::try_from_entries([("a.txt", Content::from("hello\nworld\n"))]).unwrap();
//!
//! let patch = assemble(&before, &after);
//! assert!(patch.text().contains("+world"));
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
