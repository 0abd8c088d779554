//! # Design
//!
//! - Constant error messages; the program name and exit code travel as fields.
//! - Launch failures keep the underlying `io::Error` as their source.
//! - A failed exit still carries the captured output so callers can report it.

use std::io;

use thiserror::Error;

use crate::output::ProcessResult;

/// Result type for captured process execution.
pub type RunResult<T> = Result<T, ProcessError>;

/// Errors produced while running external commands.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The argument vector was empty, so there was no program to run.
    #[error("process command is empty")]
    EmptyCommand,
    /// The child process could not be started or waited on.
    #[error("process launch failed")]
    Launch {
        /// Program that failed to launch.
        program: String,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The child ran to completion but exited non-zero while return-code checking was enabled.
    #[error("process exited with non-zero status")]
    CommandFailed {
        /// Program that failed.
        program: String,
        /// Exit code reported by the child (negative signal number when killed by a signal).
        exit_code: i32,
        /// Everything the child wrote before exiting.
        output: Box<ProcessResult>,
    },
}

impl ProcessError {
    /// Exit code carried by [`ProcessError::CommandFailed`].
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { exit_code, .. } => Some(*exit_code),
            Self::EmptyCommand | Self::Launch { .. } => None,
        }
    }
}
