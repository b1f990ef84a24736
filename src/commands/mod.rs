//! Presentation of comparison reports
//!
//! - `compare`: runs a session and writes its display records as terminal text,
//!   coloring them when color output was requested

pub mod compare;
