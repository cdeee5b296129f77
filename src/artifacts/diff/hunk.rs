use crate::artifacts::diff::diff_algorithm::Edit;

/// A contiguous run of edits plus the unchanged lines around it.
///
/// Line numbers are 1-based. When a side contributes no lines to the hunk its
/// start is the number of lines preceding the hunk on that side, so an empty
/// old file renders as `-0,0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    b_start: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Split an edit script into hunks.
    ///
    /// Two changes end up in the same hunk when at most `2 * context`
    /// unchanged lines separate them.
    pub fn build(edits: &[Edit<T>], context: usize) -> Vec<Self> {
        // lines of each side consumed before edit `i`
        let mut offsets = Vec::with_capacity(edits.len() + 1);
        let (mut a_line, mut b_line) = (0, 0);
        for edit in edits {
            offsets.push((a_line, b_line));
            a_line += usize::from(edit.has_a_line());
            b_line += usize::from(edit.has_b_line());
        }
        offsets.push((a_line, b_line));

        let changes = edits
            .iter()
            .enumerate()
            .filter(|(_, edit)| !edit.is_equal())
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        let mut hunks = Vec::new();
        let mut cursor = 0;

        while cursor < changes.len() {
            let first = changes[cursor];
            let mut last = first;
            cursor += 1;

            while cursor < changes.len() && changes[cursor] - last - 1 <= 2 * context {
                last = changes[cursor];
                cursor += 1;
            }

            let start = first.saturating_sub(context);
            let end = (last + context).min(edits.len() - 1);
            let slice = &edits[start..=end];

            let a_size = slice.iter().filter(|edit| edit.has_a_line()).count();
            let b_size = slice.iter().filter(|edit| edit.has_b_line()).count();
            let (a_before, b_before) = offsets[start];

            hunks.push(Hunk {
                a_start: if a_size > 0 { a_before + 1 } else { a_before },
                b_start: if b_size > 0 { b_before + 1 } else { b_before },
                edits: slice.to_vec(),
            });
        }

        hunks
    }
}

impl<T> Hunk<T> {
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    pub fn b_start(&self) -> usize {
        self.b_start
    }

    pub fn a_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.has_a_line()).count()
    }

    pub fn b_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.has_b_line()).count()
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start,
            self.a_size(),
            self.b_start,
            self.b_size()
        )
    }
}
