use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single desktop entry file was not turned into an [`super::AppEntry`].
///
/// None of these stop a catalog scan.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Failed to read desktop entry {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line} of {path:?} exceeds {max} bytes")]
    LineTooLong { path: PathBuf, line: usize, max: usize },

    #[error("Desktop entry {path:?} is marked NoDisplay")]
    Hidden { path: PathBuf },

    #[error("Desktop entry {path:?} has no usable {field} key")]
    MissingField { path: PathBuf, field: &'static str },
}

impl EntryError {
    /// True for read failures, as opposed to files that were read but rejected.
    pub fn is_io(&self) -> bool {
        matches!(self, EntryError::Io { .. })
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Growing the entry list failed. Fatal: the launcher cannot start.
    #[error("Failed to grow the application catalog: {0}")]
    AllocationFailure(#[from] TryReserveError),
}
