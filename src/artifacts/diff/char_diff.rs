use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, LcsDiff};
use crate::artifacts::diff::edit_script::{CharEditOp, EditOp};
use crate::errors::DiffResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Unchanged,
    Deleted,
    Inserted,
}

/// Character alignment of one substituted line pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharAlignment {
    left: Vec<char>,
    right: Vec<char>,
    ops: Vec<CharEditOp>,
}

impl CharAlignment {
    pub fn compute(left: &str, right: &str, max_cells: usize) -> DiffResult<Self> {
        let left: Vec<char> = left.chars().collect();
        let right: Vec<char> = right.chars().collect();
        let ops = LcsDiff::new(&left, &right)
            .with_max_cells(max_cells)
            .diff()?;

        Ok(CharAlignment { left, right, ops })
    }

    /// Classified runs in reading order. A substituted run yields its deleted
    /// text followed by its inserted text.
    pub fn runs(&self) -> Vec<(CharClass, String)> {
        let take = |chars: &[char], range: &std::ops::Range<usize>| -> String {
            chars[range.clone()].iter().collect()
        };

        self.ops
            .iter()
            .flat_map(|op| match op {
                EditOp::Equal { left, .. } => {
                    vec![(CharClass::Unchanged, take(&self.left, left))]
                }
                EditOp::Delete { left, .. } => vec![(CharClass::Deleted, take(&self.left, left))],
                EditOp::Insert { right, .. } => {
                    vec![(CharClass::Inserted, take(&self.right, right))]
                }
                EditOp::Substitute { left, right } => vec![
                    (CharClass::Deleted, take(&self.left, left)),
                    (CharClass::Inserted, take(&self.right, right)),
                ],
            })
            .collect()
    }
}
