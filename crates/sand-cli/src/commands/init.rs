//! Init command for pointing sand at a tracking file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use sand_core::Storage;

/// Runs the init command.
///
/// Relative paths are resolved against the current directory so the pointer
/// stays valid wherever sand is later run from.
pub fn run<W: Write, S: Storage>(
    writer: &mut W,
    storage: &S,
    pointer_path: &Path,
    file: &Path,
) -> Result<()> {
    let file = std::path::absolute(file)
        .with_context(|| format!("failed to resolve {}", file.display()))?;
    sand_core::init(storage, pointer_path, &file)?;

    writeln!(writer, "Tracking file: {}", file.display())?;
    writeln!(writer, "Saved to:      {}", pointer_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use sand_core::{MemoryStorage, SandError};

    use insta::assert_snapshot;

    #[test]
    fn init_reports_paths() {
        let storage = MemoryStorage::new();
        let mut output = Vec::new();
        run(
            &mut output,
            &storage,
            Path::new("/home/user/.sand-config"),
            Path::new("/home/user/time.log"),
        )
        .unwrap();

        assert_eq!(
            storage.contents(Path::new("/home/user/.sand-config")).as_deref(),
            Some("/home/user/time.log")
        );
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Tracking file: /home/user/time.log
        Saved to:      /home/user/.sand-config
        ");
    }

    #[test]
    fn init_rejects_existing_pointer() {
        let storage = MemoryStorage::new();
        storage
            .write(Path::new("/home/user/.sand-config"), "/old.log")
            .unwrap();

        let mut output = Vec::new();
        let err = run(
            &mut output,
            &storage,
            Path::new("/home/user/.sand-config"),
            Path::new("/home/user/time.log"),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SandError>(),
            Some(SandError::AlreadyInitialized { .. })
        ));
        assert!(output.is_empty());
    }
}
