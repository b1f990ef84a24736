//! Sequence alignment
//!
//! This module implements the LCS-based alignment used at two granularities:
//!
//! - `diff_algorithm`: the dynamic-programming LCS table and its backtrack
//! - `edit_script`: edit operations over index ranges and the line-level script
//! - `char_diff`: the same alignment applied to the characters of a line pair
//!
//! Both granularities share one `EditOp` shape; only the unit (line or char) differs.

pub mod char_diff;
pub mod diff_algorithm;
pub mod edit_script;
