//! Storage collaborator contract.
//!
//! The tracker only ever reads a whole file or appends to its tail. `write`
//! exists for the pointer file, which is replaced wholesale by `init`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-file access used by the tracker and pointer handling.
///
/// Errors are returned as-is to the caller; implementations must not retry.
pub trait Storage {
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Reads an entire file as UTF-8. Fails if the file is absent.
    fn read_all(&self, path: &Path) -> io::Result<String>;

    /// Appends `text` to the end of the file, creating it if needed.
    ///
    /// `text` must reach the file in a single write so multi-line appends are
    /// not interleaved with other output.
    fn append(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Replaces the file's contents.
    fn write(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Creates an empty file unless one already exists.
    fn create_if_absent(&self, path: &Path) -> io::Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        (**self).exists(path)
    }

    fn read_all(&self, path: &Path) -> io::Result<String> {
        (**self).read_all(path)
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        (**self).append(path, text)
    }

    fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        (**self).write(path, text)
    }

    fn create_if_absent(&self, path: &Path) -> io::Result<()> {
        (**self).create_if_absent(path)
    }
}

/// In-memory files keyed by path.
///
/// Not thread-safe; intended for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of a file's contents, if present.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: no such file", path.display()),
        )
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.files.borrow().contains_key(path))
    }

    fn read_all(&self, path: &Path) -> io::Result<String> {
        self.contents(path).ok_or_else(|| Self::not_found(path))
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(text);
        Ok(())
    }

    fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    fn create_if_absent(&self, path: &Path) -> io::Result<()> {
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file_is_not_found() {
        let storage = MemoryStorage::new();
        let err = storage.read_all(Path::new("/missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn append_creates_and_extends() {
        let storage = MemoryStorage::new();
        let path = Path::new("/log");
        storage.append(path, "a\n").unwrap();
        storage.append(path, "b\n").unwrap();
        assert_eq!(storage.read_all(path).unwrap(), "a\nb\n");
    }

    #[test]
    fn create_if_absent_keeps_contents() {
        let storage = MemoryStorage::new();
        let path = Path::new("/log");
        storage.write(path, "important logs").unwrap();
        storage.create_if_absent(path).unwrap();
        assert_eq!(storage.contents(path).as_deref(), Some("important logs"));
    }
}
