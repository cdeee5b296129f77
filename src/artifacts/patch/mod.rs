//! Patch assembly
//!
//! Turns two snapshots into a single unified patch plus a structured summary
//! of the changed files. The pass is linear: classify, order, render, join.
//!
//! - `summary`: Changed files grouped by category with their content

pub mod summary;

use crate::artifacts::diff::HUNK_CONTEXT;
use crate::artifacts::diff::change_set::{ChangeSet, DiffFilter};
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::file_diff::FileDiff;
use crate::artifacts::patch::summary::ChangeSummary;
use crate::artifacts::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOptions {
    pub context_lines: usize,
    pub filter: DiffFilter,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            context_lines: HUNK_CONTEXT,
            filter: DiffFilter::all(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    text: String,
    summary: ChangeSummary,
    changes: ChangeSet,
}

impl Patch {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn summary(&self) -> &ChangeSummary {
        &self.summary
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn into_parts(self) -> (String, ChangeSummary) {
        (self.text, self.summary)
    }
}

/// Render the patch between `before` and `after` with default options.
pub fn assemble(before: &Snapshot, after: &Snapshot) -> Patch {
    assemble_with(before, after, &PatchOptions::default())
}

/// Render the patch between `before` and `after`.
///
/// Blocks appear as deleted, modified, then added files, each group sorted by
/// path, and every block is followed by one blank separator line.
pub fn assemble_with(before: &Snapshot, after: &Snapshot, options: &PatchOptions) -> Patch {
    let changes = ChangeSet::classify(before, after).filter(options.filter);

    let mut lines = Vec::new();
    for (path, change) in changes.iter() {
        let diff = FileDiff::new(
            DiffTarget::from_snapshot(path, before),
            DiffTarget::from_snapshot(path, after),
        );
        let block = diff.render(options.context_lines);
        tracing::trace!(%path, change = %change.status_char(), lines = block.len(), "rendered file block");

        lines.extend(block);
        lines.push(String::new());
    }

    let summary = ChangeSummary::from_changes(&changes, before, after);
    tracing::debug!(files = changes.len(), "assembled patch");

    Patch {
        text: lines.join("\n"),
        summary,
        changes,
    }
}
