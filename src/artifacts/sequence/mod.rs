//! Loaded inputs
//!
//! - `line`: one source line with its display text and comparison key
//! - `sequence`: the ordered, 1-indexed lines of one input

pub mod line;
pub mod sequence;
