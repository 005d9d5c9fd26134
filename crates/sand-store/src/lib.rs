//! Filesystem storage for the sand time tracker.
//!
//! Implements [`sand_core::Storage`] with plain `std::fs` calls. Files are
//! only ever read whole, appended to, or (for the pointer file) replaced;
//! nothing seeks or truncates the tracking log.
//!
//! # Concurrency
//!
//! No locking is performed. A single process is assumed to manipulate a
//! given tracking file at a time.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use sand_core::Storage;

/// Storage backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl FileStorage {
    pub const fn new() -> Self {
        Self
    }
}

/// Creates the parent directory of `path` if it is missing.
fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

impl Storage for FileStorage {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read_all(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(text.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "appended");
        Ok(())
    }

    fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        ensure_parent(path)?;
        fs::write(path, text)
    }

    fn create_if_absent(&self, path: &Path) -> io::Result<()> {
        ensure_parent(path)?;
        OpenOptions::new().create(true).append(true).open(path)?;
        Ok(())
    }
}
