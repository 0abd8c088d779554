//! # Design
//!
//! - Provide structured, constant-message errors for timestamp-preserving copies.
//! - Capture operation context (operation name, path) so callers can log and act on failures.
//! - Classify by `io::ErrorKind` so missing paths and permission failures stay distinguishable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for filesystem operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced by timestamp-preserving copies.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// A required path did not exist.
    #[error("fsops path not found")]
    NotFound {
        /// Operation that required the path.
        operation: &'static str,
        /// Path that was missing.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Access to a path or its metadata was denied.
    #[error("fsops permission denied")]
    PermissionDenied {
        /// Operation that was refused.
        operation: &'static str,
        /// Path involved in the refusal.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Source and destination name the same file; copying would truncate it.
    #[error("fsops source and destination are the same file")]
    SameFile {
        /// Operation that refused to run.
        operation: &'static str,
        /// Resolved path shared by source and destination.
        path: PathBuf,
    },
    /// Any other IO failure (interrupted copy, full disk, ...).
    #[error("fsops io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl FsOpsError {
    /// Classify an IO error raised while `operation` touched `path`.
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                operation,
                path,
                source,
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                operation,
                path,
                source,
            },
            _ => Self::Io {
                operation,
                path,
                source,
            },
        }
    }

    #[cfg(unix)]
    pub(crate) fn nix(operation: &'static str, path: impl Into<PathBuf>, errno: nix::Error) -> Self {
        Self::io(operation, path, io::Error::from(errno))
    }

    /// Operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::NotFound { operation, .. }
            | Self::PermissionDenied { operation, .. }
            | Self::SameFile { operation, .. }
            | Self::Io { operation, .. } => operation,
        }
    }

    /// Path the failing operation was working on.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::SameFile { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}
