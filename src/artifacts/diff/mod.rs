//! Change classification and line-level diffing
//!
//! This module implements the comparison side of the engine:
//!
//! - `change_set`: Partitioning of paths into added, modified and deleted
//! - `diff_algorithm`: Myers' diff for line-by-line comparison
//! - `diff_target`: One side of a file comparison (`a/` or `b/`)
//! - `file_diff`: Rendering of a single file's unified-diff block
//! - `hunk`: Grouping of edits into hunks with surrounding context
//!
//! Classification decides *which* files changed; the renderer decides *what*
//! changed inside each of them.

pub mod change_set;
pub mod diff_algorithm;
pub mod diff_target;
pub mod file_diff;
pub mod hunk;

pub const HUNK_CONTEXT: usize = 3;
