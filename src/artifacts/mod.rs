//! Comparison data structures and algorithms
//!
//! This module contains the pure stages of a run:
//!
//! - `core`: shared output plumbing (pager adapter)
//! - `options`: the immutable per-run configuration and its derived views
//! - `normalize`: comparison keys for line equality
//! - `sequence`: loaded lines and the sequences holding them
//! - `diff`: LCS alignment over lines and characters
//! - `render`: edit scripts turned into display records

pub mod core;
pub mod diff;
pub mod normalize;
pub mod options;
pub mod render;
pub mod sequence;
