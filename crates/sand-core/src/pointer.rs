//! The pointer file naming the active tracking file.
//!
//! The pointer is a one-line file at a fixed location. Callers resolve the
//! tracking file once at startup and hand the path to [`crate::Tracker`].

use std::path::{Path, PathBuf};

use crate::storage::Storage;
use crate::{Result, SandError};

/// Points `pointer_path` at `log_path` and creates the log if needed.
///
/// Fails with [`SandError::AlreadyInitialized`] without touching anything if
/// the pointer already exists. A log path that is not valid UTF-8 fails with
/// [`SandError::NonUtf8Path`], also before any write. An existing log file is
/// left as it is.
pub fn init<S: Storage>(storage: &S, pointer_path: &Path, log_path: &Path) -> Result<()> {
    if storage.exists(pointer_path)? {
        return Err(SandError::AlreadyInitialized {
            path: pointer_path.to_path_buf(),
        });
    }

    let Some(target) = log_path.to_str() else {
        return Err(SandError::NonUtf8Path {
            path: log_path.to_path_buf(),
        });
    };

    storage.write(pointer_path, target)?;
    storage.create_if_absent(log_path)?;
    tracing::info!(
        pointer = %pointer_path.display(),
        log = %log_path.display(),
        "initialised tracking file"
    );
    Ok(())
}

/// Reads the tracking file path from the pointer.
pub fn tracking_file_path<S: Storage>(storage: &S, pointer_path: &Path) -> Result<PathBuf> {
    if !storage.exists(pointer_path)? {
        return Err(SandError::NotInitialized {
            path: pointer_path.to_path_buf(),
        });
    }

    let contents = storage.read_all(pointer_path)?;
    let target = contents.trim();
    if target.is_empty() {
        return Err(SandError::EmptyPointer {
            path: pointer_path.to_path_buf(),
        });
    }
    Ok(PathBuf::from(target))
}
