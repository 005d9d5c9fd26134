//! Error taxonomy for tracker operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::entry::LineError;

/// Errors returned by tracker and pointer operations.
///
/// Every error is terminal for the operation that produced it. Variants other
/// than [`SandError::Io`] are raised before any storage mutation.
#[derive(Debug, Error)]
pub enum SandError {
    /// `init` was requested but the pointer file is already present.
    #[error(
        "{} already exists. Delete it and try again if you wish to re-initialise.",
        path.display()
    )]
    AlreadyInitialized { path: PathBuf },

    /// The pointer file does not exist yet.
    #[error("{} not found. Run 'sand init <file>' first.", path.display())]
    NotInitialized { path: PathBuf },

    /// The pointer file exists but names no log file.
    #[error("{} does not name a tracking file", path.display())]
    EmptyPointer { path: PathBuf },

    /// The tracking file path cannot be written to the pointer as UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    NonUtf8Path { path: PathBuf },

    /// `start` was called with empty or blank activity text.
    #[error("An activity must be given")]
    InvalidActivity,

    /// `stop` was called while nothing is running.
    #[error("Nothing is running")]
    NothingRunning,

    /// A log line could not be decoded.
    #[error("malformed entry on line {line_number}: {source} ({line:?})")]
    MalformedLine {
        line_number: usize,
        line: String,
        #[source]
        source: LineError,
    },

    /// An error from the storage collaborator, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
