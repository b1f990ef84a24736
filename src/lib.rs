//! Line-aligned text comparison
//!
//! The crate is organized the way the pipeline runs:
//!
//! - `areas`: stateful collaborators (input source, comparison session and its writer)
//! - `artifacts`: normalization, LCS alignment, character alignment and rendering
//! - `commands`: presentation of display records as terminal text
//! - `errors`: the fatal error taxonomy shared by every stage

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use errors::{DiffError, DiffResult};
