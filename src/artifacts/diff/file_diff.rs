use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use crate::artifacts::diff::diff_target::DiffTarget;
use derive_new::new;

/// Unified-diff block for a single file.
#[derive(Debug, Clone, new)]
pub struct FileDiff<'d> {
    a: DiffTarget<'d>,
    b: DiffTarget<'d>,
}

impl<'d> FileDiff<'d> {
    /// Render the block as lines, file headers first.
    ///
    /// A created or deleted file is shown whole; a file present on both sides
    /// is shown as hunks with `context` unchanged lines around each change.
    /// Equal content yields the two header lines only.
    pub fn render(&self, context: usize) -> Vec<String> {
        let mut lines = vec![
            format!("--- {}", self.a.diff_path("a")),
            format!("+++ {}", self.b.diff_path("b")),
        ];

        match (self.a.exists(), self.b.exists()) {
            (true, false) => lines.extend(
                self.a
                    .lines()
                    .into_iter()
                    .map(|value| Edit::Delete { value }.as_string()),
            ),
            (false, true) => lines.extend(
                self.b
                    .lines()
                    .into_iter()
                    .map(|value| Edit::Insert { value }.as_string()),
            ),
            (true, true) => {
                let (a, b) = (self.a.lines(), self.b.lines());
                for hunk in MyersDiff::new(&a, &b).hunks(context) {
                    lines.push(hunk.header());
                    lines.extend(hunk.edits().iter().map(Edit::as_string));
                }
            }
            (false, false) => {}
        }

        lines
    }
}
