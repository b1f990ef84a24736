use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, LcsDiff, Step};
use crate::artifacts::sequence::sequence::Sequence;
use crate::errors::DiffResult;
use std::ops::Range;
use tracing::debug;

/// One aligned region. Ranges are 0-based, half-open offsets into the left and
/// right token slices; the side a Delete or Insert does not cover carries an
/// empty range positioned where the change sits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditOp {
    Equal {
        left: Range<usize>,
        right: Range<usize>,
    },
    Delete {
        left: Range<usize>,
        right: Range<usize>,
    },
    Insert {
        left: Range<usize>,
        right: Range<usize>,
    },
    Substitute {
        left: Range<usize>,
        right: Range<usize>,
    },
}

/// Character-level edits share the line-level shape; offsets count chars.
pub type CharEditOp = EditOp;

impl EditOp {
    pub fn left(&self) -> &Range<usize> {
        match self {
            EditOp::Equal { left, .. }
            | EditOp::Delete { left, .. }
            | EditOp::Insert { left, .. }
            | EditOp::Substitute { left, .. } => left,
        }
    }

    pub fn right(&self) -> &Range<usize> {
        match self {
            EditOp::Equal { right, .. }
            | EditOp::Delete { right, .. }
            | EditOp::Insert { right, .. }
            | EditOp::Substitute { right, .. } => right,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Equal { .. })
    }

    /// The same region seen from the other side: Deletes and Inserts swap.
    pub fn mirror(&self) -> EditOp {
        let (left, right) = (self.right().clone(), self.left().clone());
        match self {
            EditOp::Equal { .. } => EditOp::Equal { left, right },
            EditOp::Delete { .. } => EditOp::Insert { left, right },
            EditOp::Insert { .. } => EditOp::Delete { left, right },
            EditOp::Substitute { .. } => EditOp::Substitute { left, right },
        }
    }

    /// Number of unit deletions plus insertions this op stands for.
    pub fn edit_count(&self) -> usize {
        match self {
            EditOp::Equal { .. } => 0,
            _ => self.left().len() + self.right().len(),
        }
    }
}

/// Folds unit steps into ranged ops. Consecutive Equals become one Equal; a
/// run of Deletes and Inserts between two Equals becomes one Delete, Insert or,
/// when both sides lost and gained tokens, one Substitute.
pub fn compact(steps: &[Step]) -> Vec<EditOp> {
    let mut ops = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    let (mut run_i, mut run_j) = (0usize, 0usize);
    let mut in_equal = false;

    let flush_change = |ops: &mut Vec<EditOp>, run_i: usize, run_j: usize, i: usize, j: usize| {
        let (left, right) = (run_i..i, run_j..j);
        match (left.is_empty(), right.is_empty()) {
            (true, true) => {}
            (false, true) => ops.push(EditOp::Delete { left, right }),
            (true, false) => ops.push(EditOp::Insert { left, right }),
            (false, false) => ops.push(EditOp::Substitute { left, right }),
        }
    };

    for step in steps {
        match step {
            Step::Equal => {
                if !in_equal {
                    flush_change(&mut ops, run_i, run_j, i, j);
                    (run_i, run_j) = (i, j);
                    in_equal = true;
                }
                i += 1;
                j += 1;
            }
            Step::Delete | Step::Insert => {
                if in_equal {
                    ops.push(EditOp::Equal {
                        left: run_i..i,
                        right: run_j..j,
                    });
                    (run_i, run_j) = (i, j);
                    in_equal = false;
                }
                if *step == Step::Delete {
                    i += 1;
                } else {
                    j += 1;
                }
            }
        }
    }

    if in_equal {
        ops.push(EditOp::Equal {
            left: run_i..i,
            right: run_j..j,
        });
    } else {
        flush_change(&mut ops, run_i, run_j, i, j);
    }

    ops
}

/// Line-level alignment of two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript {
    ops: Vec<EditOp>,
    left_len: usize,
    right_len: usize,
}

impl EditScript {
    /// Aligns the comparison keys of both sequences.
    pub fn compute(left: &Sequence, right: &Sequence, max_cells: usize) -> DiffResult<Self> {
        let (left_keys, right_keys) = (left.keys(), right.keys());
        let ops = LcsDiff::new(&left_keys, &right_keys)
            .with_max_cells(max_cells)
            .diff()?;

        let script = EditScript {
            ops,
            left_len: left.len(),
            right_len: right.len(),
        };
        debug!(
            ops = script.ops.len(),
            differences = script.differences(),
            "aligned {} against {}",
            left.label(),
            right.label()
        );

        Ok(script)
    }

    pub fn from_ops(ops: Vec<EditOp>, left_len: usize, right_len: usize) -> Self {
        EditScript {
            ops,
            left_len,
            right_len,
        }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Number of non-Equal ops.
    pub fn differences(&self) -> usize {
        self.ops.iter().filter(|op| op.is_change()).count()
    }

    pub fn is_identical(&self) -> bool {
        self.differences() == 0
    }

    /// Total deleted plus inserted lines.
    pub fn edit_count(&self) -> usize {
        self.ops.iter().map(EditOp::edit_count).sum()
    }

    /// True when the ranges tile `[0, left_len)` and `[0, right_len)` in order,
    /// and every op matches the shape its variant promises.
    pub fn is_partition(&self) -> bool {
        let (mut i, mut j) = (0usize, 0usize);

        for op in &self.ops {
            let (left, right) = (op.left(), op.right());
            if left.start != i || right.start != j || left.end < left.start || right.end < right.start
            {
                return false;
            }

            let shape_ok = match op {
                EditOp::Equal { .. } => !left.is_empty() && left.len() == right.len(),
                EditOp::Delete { .. } => !left.is_empty() && right.is_empty(),
                EditOp::Insert { .. } => left.is_empty() && !right.is_empty(),
                EditOp::Substitute { .. } => !left.is_empty() && !right.is_empty(),
            };
            if !shape_ok {
                return false;
            }

            (i, j) = (left.end, right.end);
        }

        i == self.left_len && j == self.right_len
    }

    /// Replays the script over `left`, taking inserted and substituted items
    /// from `right`.
    pub fn apply<T: Clone>(&self, left: &[T], right: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(self.right_len);

        for op in &self.ops {
            match op {
                EditOp::Equal { left: range, .. } => out.extend_from_slice(&left[range.clone()]),
                EditOp::Delete { .. } => {}
                EditOp::Insert { right: range, .. } | EditOp::Substitute { right: range, .. } => {
                    out.extend_from_slice(&right[range.clone()])
                }
            }
        }

        out
    }

    /// The script transforming right into left.
    pub fn mirror(&self) -> EditScript {
        EditScript {
            ops: self.ops.iter().map(EditOp::mirror).collect(),
            left_len: self.right_len,
            right_len: self.left_len,
        }
    }
}
