//! Access/modify timestamp transfer between filesystem entries.
//!
//! # Design
//! - Only atime and mtime move; content, ownership, mode bits and extended attributes are left
//!   alone (xattr copies misbehave under SELinux for files staged in temp dirs).
//! - Unix reads and writes go through `stat`/`utimensat` to keep nanosecond precision.

use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

use crate::error::FsOpsResult;
use crate::path::resolve_path;

/// Access and modification times of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimestamps {
    /// Last access time.
    pub accessed: SystemTime,
    /// Last modification time.
    pub modified: SystemTime,
}

/// Read the access and modification times of `path`.
///
/// # Errors
///
/// Returns [`crate::FsOpsError::NotFound`] when `path` does not exist and
/// [`crate::FsOpsError::PermissionDenied`] when it cannot be inspected.
pub fn read_timestamps(path: impl AsRef<Path>) -> FsOpsResult<FileTimestamps> {
    sys::read(path.as_ref())
}

/// Apply `timestamps` to the existing entry at `path`.
///
/// # Errors
///
/// Returns [`crate::FsOpsError::NotFound`] when `path` does not exist and
/// [`crate::FsOpsError::PermissionDenied`] when its metadata cannot be changed.
pub fn apply_timestamps(path: impl AsRef<Path>, timestamps: FileTimestamps) -> FsOpsResult<()> {
    sys::apply(path.as_ref(), timestamps)
}

/// Copy only the access and modification times from `source` onto `dest`.
///
/// Both paths are resolved to canonical form first and both must exist. File
/// content is never read or written, which makes this usable after a tool has
/// rewritten `dest` in place.
///
/// # Errors
///
/// Returns [`crate::FsOpsError::NotFound`] when either path is missing, or
/// another [`crate::FsOpsError`] when metadata cannot be read or written.
pub fn copy_basic_file_stats(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> FsOpsResult<()> {
    let source = resolve_path(source)?;
    let dest = resolve_path(dest)?;
    let timestamps = read_timestamps(&source)?;
    apply_timestamps(&dest, timestamps)?;
    debug!(
        source = %source.display(),
        dest = %dest.display(),
        "copied basic file stats"
    );
    Ok(())
}

#[cfg(unix)]
mod sys {
    use std::path::Path;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use nix::sys::stat::{UtimensatFlags, stat, utimensat};
    use nix::sys::time::TimeSpec;

    use super::FileTimestamps;
    use crate::error::{FsOpsError, FsOpsResult};

    pub(super) fn read(path: &Path) -> FsOpsResult<FileTimestamps> {
        let stat = stat(path).map_err(|errno| FsOpsError::nix("read_timestamps.stat", path, errno))?;
        Ok(FileTimestamps {
            accessed: to_system_time(i64::from(stat.st_atime), i64::from(stat.st_atime_nsec)),
            modified: to_system_time(i64::from(stat.st_mtime), i64::from(stat.st_mtime_nsec)),
        })
    }

    pub(super) fn apply(path: &Path, timestamps: FileTimestamps) -> FsOpsResult<()> {
        utimensat(
            None,
            path,
            &to_timespec(timestamps.accessed),
            &to_timespec(timestamps.modified),
            UtimensatFlags::FollowSymlink,
        )
        .map_err(|errno| FsOpsError::nix("apply_timestamps.utimensat", path, errno))
    }

    pub(super) fn to_system_time(seconds: i64, nanoseconds: i64) -> SystemTime {
        let nanos = Duration::from_nanos(nanoseconds.clamp(0, 999_999_999).unsigned_abs());
        let whole = Duration::from_secs(seconds.unsigned_abs());
        let base = if seconds >= 0 {
            UNIX_EPOCH.checked_add(whole)
        } else {
            UNIX_EPOCH.checked_sub(whole)
        };
        base.and_then(|time| time.checked_add(nanos))
            .unwrap_or(UNIX_EPOCH)
    }

    pub(super) fn to_timespec(time: SystemTime) -> TimeSpec {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => TimeSpec::from_duration(after),
            Err(before) => -TimeSpec::from_duration(before.duration()),
        }
    }
}

#[cfg(not(unix))]
mod sys {
    use std::fs::{self, File, FileTimes};
    use std::path::Path;

    use super::FileTimestamps;
    use crate::error::{FsOpsError, FsOpsResult};

    pub(super) fn read(path: &Path) -> FsOpsResult<FileTimestamps> {
        let metadata = fs::metadata(path)
            .map_err(|err| FsOpsError::io("read_timestamps.metadata", path, err))?;
        let accessed = metadata
            .accessed()
            .map_err(|err| FsOpsError::io("read_timestamps.accessed", path, err))?;
        let modified = metadata
            .modified()
            .map_err(|err| FsOpsError::io("read_timestamps.modified", path, err))?;
        Ok(FileTimestamps { accessed, modified })
    }

    pub(super) fn apply(path: &Path, timestamps: FileTimestamps) -> FsOpsResult<()> {
        let file = File::options()
            .write(true)
            .open(path)
            .map_err(|err| FsOpsError::io("apply_timestamps.open", path, err))?;
        let times = FileTimes::new()
            .set_accessed(timestamps.accessed)
            .set_modified(timestamps.modified);
        file.set_times(times)
            .map_err(|err| FsOpsError::io("apply_timestamps.set_times", path, err))
    }
}
