//! # Errors
//!
//! Every fallible operation in the crate returns [`ChartResult`]. Failures are
//! never recovered locally: a builder that fails writes no file and shows
//! nothing.

use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("length mismatch for `{name}`: expected {expected} values, got {actual}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("series `{0}` does not share the table index")]
    IndexMismatch(String),

    #[error("duplicate column `{0}`")]
    DuplicateColumn(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to display chart: {0}")]
    Display(#[source] std::io::Error),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
