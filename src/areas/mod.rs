//! Stateful collaborators of a comparison run
//!
//! - `input`: loading an input path into a `Sequence`
//! - `session`: one comparison run, owning the options and the output writer

pub mod input;
pub mod session;
