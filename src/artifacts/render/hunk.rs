use crate::artifacts::diff::edit_script::EditOp;
use crate::artifacts::render::display_record::LineSpan;
use std::ops::Range;
use tracing::trace;

/// One line of a hunk, as 0-based offsets into the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkEntry {
    Context { left: usize, right: usize },
    Removed(usize),
    Added(usize),
}

/// Contiguous changes plus up to `context` unchanged lines around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    left_start: usize,
    right_start: usize,
    left_count: usize,
    right_count: usize,
    entries: Vec<HunkEntry>,
}

impl Hunk {
    fn starting_at(left_start: usize, right_start: usize) -> Self {
        Hunk {
            left_start,
            right_start,
            left_count: 0,
            right_count: 0,
            entries: Vec::new(),
        }
    }

    fn push_context(&mut self, left: Range<usize>, right: Range<usize>) {
        for (l, r) in left.zip(right) {
            self.entries.push(HunkEntry::Context { left: l, right: r });
            self.left_count += 1;
            self.right_count += 1;
        }
    }

    fn push_change(&mut self, op: &EditOp) {
        for l in op.left().clone() {
            self.entries.push(HunkEntry::Removed(l));
            self.left_count += 1;
        }
        for r in op.right().clone() {
            self.entries.push(HunkEntry::Added(r));
            self.right_count += 1;
        }
    }

    pub fn left_span(&self) -> LineSpan {
        LineSpan::from_range(&(self.left_start..self.left_start + self.left_count))
    }

    pub fn right_span(&self) -> LineSpan {
        LineSpan::from_range(&(self.right_start..self.right_start + self.right_count))
    }

    pub fn entries(&self) -> &[HunkEntry] {
        &self.entries
    }

    /// Groups the changes of `ops` into hunks. Two changes separated by at most
    /// `2 * context` equal lines share a hunk.
    pub fn filter(ops: &[EditOp], context: usize) -> Vec<Hunk> {
        let mut hunks = Vec::new();
        let mut current: Option<Hunk> = None;

        for (idx, op) in ops.iter().enumerate() {
            match op {
                EditOp::Equal { left, right } => {
                    let Some(mut hunk) = current.take() else {
                        continue;
                    };

                    let is_last = idx + 1 == ops.len();
                    if !is_last && left.len() <= 2 * context {
                        hunk.push_context(left.clone(), right.clone());
                        current = Some(hunk);
                    } else {
                        let take = left.len().min(context);
                        hunk.push_context(
                            left.start..left.start + take,
                            right.start..right.start + take,
                        );
                        hunks.push(hunk);
                    }
                }
                change => {
                    let hunk = current.get_or_insert_with(|| {
                        Self::open(idx.checked_sub(1).map(|prev| &ops[prev]), change, context)
                    });
                    hunk.push_change(change);
                }
            }
        }

        if let Some(hunk) = current {
            hunks.push(hunk);
        }
        trace!(hunks = hunks.len(), context, "grouped changes into hunks");

        hunks
    }

    /// Starts a hunk for `change`, seeded with the tail of the preceding Equal.
    fn open(previous: Option<&EditOp>, change: &EditOp, context: usize) -> Hunk {
        match previous {
            Some(EditOp::Equal { left, right }) => {
                let take = left.len().min(context);
                let mut hunk = Hunk::starting_at(left.end - take, right.end - take);
                hunk.push_context(left.end - take..left.end, right.end - take..right.end);
                hunk
            }
            _ => Hunk::starting_at(change.left().start, change.right().start),
        }
    }
}
