use crate::artifacts::options::NormalizeOptions;
use crate::artifacts::sequence::sequence::Sequence;
use crate::errors::{DiffError, DiffResult};
use std::path::Path;
use tracing::debug;

/// Produces the ordered lines of an input.
pub trait LineSource {
    fn load_lines(&self, path: &Path, options: &NormalizeOptions) -> DiffResult<Sequence>;
}

/// Reads inputs from the file system. Invalid UTF-8 is replaced, never rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl LineSource for FileSource {
    fn load_lines(&self, path: &Path, options: &NormalizeOptions) -> DiffResult<Sequence> {
        let bytes = std::fs::read(path).map_err(|e| DiffError::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let sequence = Sequence::from_text(path.display().to_string(), &text, options);

        debug!(
            path = %path.display(),
            bytes = bytes.len(),
            lines = sequence.len(),
            "loaded input"
        );

        Ok(sequence)
    }
}
