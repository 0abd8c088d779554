//! Path resolution shared by the copy helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FsOpsError, FsOpsResult};

/// Resolve `path` to an absolute, canonical form with symlinks followed.
///
/// Paths that do not exist yet are resolved through their deepest existing
/// ancestor; the missing trailing components are appended unchanged.
///
/// # Errors
///
/// Returns an error when the path (or an ancestor) cannot be inspected, for
/// example because of missing permissions.
pub fn resolve_path(path: impl AsRef<Path>) -> FsOpsResult<PathBuf> {
    let path = path.as_ref();
    match fs::canonicalize(path) {
        Ok(resolved) => return Ok(resolved),
        Err(err) if err.kind() != io::ErrorKind::NotFound => {
            return Err(FsOpsError::io("resolve_path.canonicalize", path, err));
        }
        Err(_) => {}
    }

    let absolute = std::path::absolute(path)
        .map_err(|err| FsOpsError::io("resolve_path.absolute", path, err))?;
    for ancestor in absolute.ancestors().skip(1) {
        let Ok(resolved) = fs::canonicalize(ancestor) else {
            continue;
        };
        if let Ok(rest) = absolute.strip_prefix(ancestor) {
            return Ok(resolved.join(rest));
        }
    }
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use docket_test_support::fixtures::{temp_dir, write_file};

    #[test]
    fn existing_paths_are_canonicalised() -> Result<()> {
        let temp = temp_dir("docket-fsops-")?;
        let file = write_file(temp.path(), "a.txt", b"a")?;
        let dotted = temp.path().join(".").join("a.txt");
        assert_eq!(resolve_path(&dotted)?, fs::canonicalize(&file)?);
        Ok(())
    }

    #[test]
    fn missing_leaf_keeps_its_name_under_canonical_parent() -> Result<()> {
        let temp = temp_dir("docket-fsops-")?;
        let resolved = resolve_path(temp.path().join("new").join("b.txt"))?;
        assert_eq!(
            resolved,
            fs::canonicalize(temp.path())?.join("new").join("b.txt")
        );
        assert!(resolved.is_absolute());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_followed() -> Result<()> {
        let temp = temp_dir("docket-fsops-")?;
        let target = write_file(temp.path(), "target.txt", b"t")?;
        let link = temp.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link)?;
        assert_eq!(resolve_path(&link)?, fs::canonicalize(&target)?);
        Ok(())
    }
}
