//! Error taxonomy for a comparison run
//!
//! Every failure is fatal and deterministic: the run either completes the full
//! comparison or aborts before any output is written.

use std::path::PathBuf;
use thiserror::Error;

pub type DiffResult<T> = Result<T, DiffError>;

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "alignment table of {cells} cells exceeds the limit of {limit}; \
         raise --max-cells or compare with a linear-space (streaming) diff"
    )]
    ResourceExceeded { cells: u128, limit: usize },

    #[error("invalid options: {0}")]
    Config(String),
}

impl DiffError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DiffError::Config(message.into())
    }
}
