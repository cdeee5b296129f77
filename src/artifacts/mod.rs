//! Diff engine data structures and algorithms
//!
//! This module contains the pure, I/O free part of the crate:
//!
//! - `core`: Shared output utilities (pager wrapper)
//! - `diff`: Change classification and Myers' line diff
//! - `patch`: Patch assembly and change summaries
//! - `snapshot`: Paths, content and snapshots

pub mod core;
pub mod diff;
pub mod patch;
pub mod snapshot;
