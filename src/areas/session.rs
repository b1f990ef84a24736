use crate::areas::input::{FileSource, LineSource};
use crate::artifacts::diff::edit_script::EditScript;
use crate::artifacts::options::DiffOptions;
use crate::artifacts::render::display_record::Report;
use crate::artifacts::render::renderer::{OutputMode, Renderer};
use crate::errors::DiffResult;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use tracing::debug;

/// One comparison run: validated options, an input source and the writer the
/// rendered report goes to.
pub struct Session {
    options: DiffOptions,
    source: Box<dyn LineSource>,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    /// Validates `options` before anything is read.
    pub fn new(options: DiffOptions, writer: Box<dyn std::io::Write>) -> DiffResult<Self> {
        Self::with_source(options, Box::new(FileSource), writer)
    }

    pub fn with_source(
        options: DiffOptions,
        source: Box<dyn LineSource>,
        writer: Box<dyn std::io::Write>,
    ) -> DiffResult<Self> {
        options.validate()?;

        Ok(Session {
            options,
            source,
            writer: RefCell::new(writer),
        })
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Load, normalize, align and render. Nothing is written here, so a failure
    /// at any stage leaves the output untouched.
    pub fn run(&self, left: &Path, right: &Path) -> DiffResult<Report> {
        let normalize = self.options.normalize_options();
        let left = self.source.load_lines(left, &normalize)?;
        let right = self.source.load_lines(right, &normalize)?;

        let script = EditScript::compute(&left, &right, self.options.max_cells)?;
        debug!(
            left = left.len(),
            right = right.len(),
            differences = script.differences(),
            "computed edit script"
        );

        Renderer::new(&self.options).render(
            &script,
            &left,
            &right,
            OutputMode::from_options(&self.options),
        )
    }
}
