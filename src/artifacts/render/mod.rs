//! Rendering of edit scripts
//!
//! - `display_record`: the records handed to the presentation layer
//! - `hunk`: grouping of changes with surrounding context for unified output
//! - `renderer`: walks a script and produces records for either output mode

pub mod display_record;
pub mod hunk;
pub mod renderer;
