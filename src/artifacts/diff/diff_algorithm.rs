use crate::artifacts::diff::edit_script::{EditOp, compact};
use crate::artifacts::options::DEFAULT_MAX_CELLS;
use crate::errors::{DiffError, DiffResult};
use derive_new::new;
use tracing::{debug, trace};

/// A unit move through the alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Equal,
    Delete,
    Insert,
}

pub trait DiffAlgorithm<'d, T> {
    type Table;
    type EditPath;

    fn compute_table(&self) -> DiffResult<Self::Table>;
    fn backtrack(&self, table: &Self::Table) -> Self::EditPath;
    fn diff(&self) -> DiffResult<Vec<EditOp>>;
}

/// Prefix LCS lengths: `at(i, j)` is the LCS length of `a[..i]` and `b[..j]`.
///
/// Only the part before the common suffix is tabulated; the suffix is aligned
/// diagonally when the path is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    suffix: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn at(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        let body = if self.cells.is_empty() {
            0
        } else {
            self.at(self.rows - 1, self.cols - 1) as usize
        };
        body + self.suffix
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    #[new(value = "DEFAULT_MAX_CELLS")]
    max_cells: usize,
}

impl<'d, T: Eq> LcsDiff<'d, T> {
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    fn common_suffix(&self) -> usize {
        self.a
            .iter()
            .rev()
            .zip(self.b.iter().rev())
            .take_while(|(x, y)| x == y)
            .count()
    }
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Table = LcsTable;
    type EditPath = Vec<Step>;

    fn compute_table(&self) -> DiffResult<Self::Table> {
        let suffix = self.common_suffix();
        let (m, n) = (self.a.len() - suffix, self.b.len() - suffix);
        let (rows, cols) = (m + 1, n + 1);

        // one side exhausted: the path is a straight line, no table needed
        if m == 0 || n == 0 {
            return Ok(LcsTable {
                rows,
                cols,
                suffix,
                cells: Vec::new(),
            });
        }

        let requested = rows as u128 * cols as u128;
        if requested > self.max_cells as u128 {
            return Err(DiffError::ResourceExceeded {
                cells: requested,
                limit: self.max_cells,
            });
        }
        debug!(rows, cols, suffix, "building LCS table");

        let mut cells = vec![0u32; rows * cols];
        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if self.a[i - 1] == self.b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Ok(LcsTable {
            rows,
            cols,
            suffix,
            cells,
        })
    }

    fn backtrack(&self, table: &Self::Table) -> Self::EditPath {
        let (mut i, mut j) = (table.rows - 1, table.cols - 1);
        let mut path = Vec::with_capacity(i + j + table.suffix);

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] {
                path.push(Step::Equal);
                i -= 1;
                j -= 1;
            } else if i > 0 && (j == 0 || table.at(i - 1, j) >= table.at(i, j - 1)) {
                // ties go up: deletion before insertion
                path.push(Step::Delete);
                i -= 1;
            } else {
                path.push(Step::Insert);
                j -= 1;
            }
        }

        path.reverse();
        path.extend(std::iter::repeat_n(Step::Equal, table.suffix));
        trace!(steps = path.len(), "backtracked edit path");

        path
    }

    fn diff(&self) -> DiffResult<Vec<EditOp>> {
        let table = self.compute_table()?;
        let path = self.backtrack(&table);
        Ok(compact(&path))
    }
}
