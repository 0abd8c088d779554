//! Content copy followed by timestamp reapplication.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsOpsError, FsOpsResult};
use crate::path::resolve_path;
use crate::timestamps::copy_basic_file_stats;

/// Copy the bytes of `source` to `dest`, then reapply the source's access and
/// modification times.
///
/// A simpler `copy2`: ownership, permission bits and extended attributes are
/// not propagated. When `dest` is an existing directory the file lands inside
/// it under the source's file name. Returns the path that was written.
///
/// # Errors
///
/// Returns [`FsOpsError::NotFound`] when `source` does not exist,
/// [`FsOpsError::PermissionDenied`] when either side cannot be accessed,
/// [`FsOpsError::SameFile`] when both paths name one file (directly, through a
/// symlink or a hard link), and [`FsOpsError::Io`] when the copy itself fails.
pub fn copy_file_with_basic_stats(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
) -> FsOpsResult<PathBuf> {
    let source = resolve_path(source)?;
    fs::metadata(&source).map_err(|err| FsOpsError::io("copy_file.stat_source", &source, err))?;

    let mut dest = resolve_path(dest)?;
    if dest.is_dir() {
        if let Some(name) = source.file_name() {
            dest.push(name);
        }
    }

    if is_same_file(&source, &dest) {
        return Err(FsOpsError::SameFile {
            operation: "copy_file.same_file",
            path: dest,
        });
    }

    let copied = copy_content(&source, &dest)?;
    copy_basic_file_stats(&source, &dest)?;
    debug!(
        source = %source.display(),
        dest = %dest.display(),
        bytes = copied,
        "copied file with basic stats"
    );
    Ok(dest)
}

fn is_same_file(source: &Path, dest: &Path) -> bool {
    if source == dest {
        return true;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let (Ok(src), Ok(dst)) = (fs::metadata(source), fs::metadata(dest)) {
            return src.dev() == dst.dev() && src.ino() == dst.ino();
        }
    }
    false
}

fn copy_content(source: &Path, dest: &Path) -> FsOpsResult<u64> {
    let mut reader =
        File::open(source).map_err(|err| FsOpsError::io("copy_file.open_source", source, err))?;
    let mut writer =
        File::create(dest).map_err(|err| FsOpsError::io("copy_file.create_dest", dest, err))?;
    io::copy(&mut reader, &mut writer).map_err(|err| FsOpsError::io("copy_file.write", dest, err))
}
