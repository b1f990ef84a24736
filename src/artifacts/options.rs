//! Per-invocation comparison options
//!
//! A single immutable [`DiffOptions`] value is built by the CLI layer and passed
//! by reference into every stage. Stages only see the view they need:
//! [`NormalizeOptions`] for the normalizer and [`RenderFlags`] for the renderer.

use crate::errors::{DiffError, DiffResult};
use bitflags::bitflags;

pub const DEFAULT_CONTEXT_LINES: usize = 3;
/// 2^26 cells of `u32`, i.e. a 256 MiB alignment table.
pub const DEFAULT_MAX_CELLS: usize = 1 << 26;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RenderFlags: u8 {
        const COLOR = 0b001;
        const CHAR_DIFF = 0b010;
        const UNIFIED = 0b100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub color_output: bool,
    pub character_diff: bool,
    pub unified_format: bool,
    pub context_lines: Option<usize>,
    pub max_cells: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            ignore_whitespace: false,
            ignore_case: false,
            color_output: false,
            character_diff: false,
            unified_format: false,
            context_lines: None,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl DiffOptions {
    /// Rejects contradictory or malformed combinations before any input is read.
    pub fn validate(&self) -> DiffResult<()> {
        if self.character_diff && self.unified_format {
            return Err(DiffError::config(
                "--charbychar cannot be combined with --unified",
            ));
        }

        if self.context_lines.is_some() && !self.unified_format {
            return Err(DiffError::config("--context requires --unified"));
        }

        if self.max_cells == 0 {
            return Err(DiffError::config("--max-cells must be greater than zero"));
        }

        Ok(())
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
        }
    }

    pub fn render_flags(&self) -> RenderFlags {
        let mut flags = RenderFlags::empty();
        flags.set(RenderFlags::COLOR, self.color_output);
        flags.set(RenderFlags::CHAR_DIFF, self.character_diff);
        flags.set(RenderFlags::UNIFIED, self.unified_format);
        flags
    }

    pub fn context(&self) -> usize {
        self.context_lines.unwrap_or(DEFAULT_CONTEXT_LINES)
    }
}
