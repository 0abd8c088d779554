//! Test fixtures and filesystem helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temporary directory whose name starts with `prefix`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn temp_dir(prefix: &str) -> io::Result<TempDir> {
    tempfile::Builder::new().prefix(prefix).tempdir()
}

/// Write `contents` to `name` inside `dir` and return the full path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_uses_prefix_and_is_removed_on_drop() -> io::Result<()> {
        let dir = temp_dir("docket-fixture-")?;
        let kept = dir.path().to_path_buf();
        let name = kept
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        assert!(name.starts_with("docket-fixture-"));
        assert!(kept.is_dir());
        drop(dir);
        assert!(!kept.exists());
        Ok(())
    }

    #[test]
    fn write_file_places_contents_in_dir() -> io::Result<()> {
        let dir = temp_dir("docket-fixture-")?;
        let path = write_file(dir.path(), "a.txt", b"payload")?;
        assert_eq!(fs::read(&path)?, b"payload");
        Ok(())
    }
}
