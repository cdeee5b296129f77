use crate::artifacts::diff::hunk::Hunk;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    /// Whether this edit consumes a line of the old sequence.
    pub fn has_a_line(&self) -> bool {
        matches!(self, Edit::Delete { .. } | Edit::Equal { .. })
    }

    /// Whether this edit consumes a line of the new sequence.
    pub fn has_b_line(&self) -> bool {
        matches!(self, Edit::Insert { .. } | Edit::Equal { .. })
    }
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value } => format!("-{}", value.clone().into()),
            Edit::Insert { value } => format!("+{}", value.clone().into()),
            Edit::Equal { value } => format!(" {}", value.clone().into()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<'d, T> {
    type EditScript;

    fn diff(&self) -> Self::EditScript;

    /// Group the edit script into hunks keeping `context` unchanged lines
    /// around every change.
    fn hunks(&self, context: usize) -> Vec<Hunk<T>>
    where
        T: Clone,
        Self::EditScript: AsRef<[Edit<T>]>,
    {
        Hunk::build(self.diff().as_ref(), context)
    }
}

/// Myers' shortest edit script in linear space.
///
/// Instead of keeping the furthest-reaching paths of every step for a
/// backtrack, each call searches forward and backward at once until the two
/// searches overlap on a middle snake, then recurses on both sides of it.
/// Memory stays proportional to `a.len() + b.len()`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    fn diff_slices(a: &[T], b: &[T], script: &mut Vec<Edit<T>>) {
        let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        script.extend(a[..prefix].iter().map(|value| Edit::Equal {
            value: value.clone(),
        }));
        let (a, b) = (&a[prefix..], &b[prefix..]);

        let suffix = a
            .iter()
            .rev()
            .zip(b.iter().rev())
            .take_while(|(x, y)| x == y)
            .count();
        let (a_mid, b_mid) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

        if a_mid.is_empty() || b_mid.is_empty() {
            Self::replace(a_mid, b_mid, script);
        } else {
            match Self::middle_snake(a_mid, b_mid) {
                Some((x, y)) => {
                    Self::diff_slices(&a_mid[..x], &b_mid[..y], script);
                    Self::diff_slices(&a_mid[x..], &b_mid[y..], script);
                }
                None => Self::replace(a_mid, b_mid, script),
            }
        }

        script.extend(a[a.len() - suffix..].iter().map(|value| Edit::Equal {
            value: value.clone(),
        }));
    }

    fn replace(a: &[T], b: &[T], script: &mut Vec<Edit<T>>) {
        script.extend(a.iter().map(|value| Edit::Delete {
            value: value.clone(),
        }));
        script.extend(b.iter().map(|value| Edit::Insert {
            value: value.clone(),
        }));
    }

    /// Point `(x, y)` on a shortest edit path where the forward and backward
    /// searches meet. Both inputs must be non-empty.
    fn middle_snake(a: &[T], b: &[T]) -> Option<(usize, usize)> {
        let (n, m) = (a.len() as isize, b.len() as isize);
        let max_d = (n + m + 1) / 2;
        let offset = max_d;
        let width = 2 * max_d + 2;

        // furthest x reached on each diagonal, -1 when not reached yet
        let mut forward = vec![-1isize; width as usize];
        let mut backward = vec![-1isize; width as usize];
        forward[(offset + 1) as usize] = 0;
        backward[(offset + 1) as usize] = 0;

        let delta = n - m;
        // with an odd delta the searches can only meet on a forward step
        let front = delta % 2 != 0;
        let (mut k1_start, mut k1_end, mut k2_start, mut k2_end) = (0, 0, 0, 0);
        let in_band = |idx: isize| idx >= 0 && idx < width;

        for d in 0..max_d {
            // the bounds shrink while a side is running off the edit graph
            let mut k1 = -d + k1_start;
            while k1 <= d - k1_end {
                let k1_idx = (offset + k1) as usize;
                let mut x1 = if k1 == -d || (k1 != d && forward[k1_idx - 1] < forward[k1_idx + 1])
                {
                    forward[k1_idx + 1]
                } else {
                    forward[k1_idx - 1] + 1
                };
                let mut y1 = x1 - k1;

                // snake
                while x1 < n && y1 >= 0 && y1 < m && a[x1 as usize] == b[y1 as usize] {
                    x1 += 1;
                    y1 += 1;
                }
                forward[k1_idx] = x1;

                if x1 > n {
                    // ran off the right edge
                    k1_end += 2;
                } else if y1 > m {
                    // ran off the bottom edge
                    k1_start += 2;
                } else if front {
                    let k2_idx = offset + delta - k1;
                    if in_band(k2_idx) && backward[k2_idx as usize] != -1 {
                        let x2 = n - backward[k2_idx as usize];
                        if x1 >= x2 {
                            return Some((x1 as usize, y1 as usize));
                        }
                    }
                }

                k1 += 2;
            }

            let mut k2 = -d + k2_start;
            while k2 <= d - k2_end {
                let k2_idx = (offset + k2) as usize;
                let mut x2 =
                    if k2 == -d || (k2 != d && backward[k2_idx - 1] < backward[k2_idx + 1]) {
                        backward[k2_idx + 1]
                    } else {
                        backward[k2_idx - 1] + 1
                    };
                let mut y2 = x2 - k2;

                // snake, walking both inputs from the end
                while x2 < n
                    && y2 >= 0
                    && y2 < m
                    && a[(n - x2 - 1) as usize] == b[(m - y2 - 1) as usize]
                {
                    x2 += 1;
                    y2 += 1;
                }
                backward[k2_idx] = x2;

                if x2 > n {
                    k2_end += 2;
                } else if y2 > m {
                    k2_start += 2;
                } else if !front {
                    let k1_idx = offset + delta - k2;
                    if in_band(k1_idx) && forward[k1_idx as usize] != -1 {
                        let x1 = forward[k1_idx as usize];
                        let y1 = offset + x1 - k1_idx;
                        if x1 >= n - x2 {
                            return Some((x1 as usize, y1 as usize));
                        }
                    }
                }

                k2 += 2;
            }
        }

        None
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type EditScript = Vec<Edit<T>>;

    fn diff(&self) -> Self::EditScript {
        let mut script = Vec::with_capacity(self.a.len().max(self.b.len()));
        Self::diff_slices(self.a, self.b, &mut script);
        group_changes(script)
    }
}

/// Reorder every run of changes so its deletions come before its insertions.
fn group_changes<T>(script: Vec<Edit<T>>) -> Vec<Edit<T>> {
    let mut grouped = Vec::with_capacity(script.len());
    let mut inserts = Vec::new();

    for edit in script {
        match edit {
            Edit::Delete { .. } => grouped.push(edit),
            Edit::Insert { .. } => inserts.push(edit),
            Edit::Equal { .. } => {
                grouped.append(&mut inserts);
                grouped.push(edit);
            }
        }
    }

    grouped.append(&mut inserts);
    grouped
}
