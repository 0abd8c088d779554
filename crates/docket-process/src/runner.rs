//! Blocking execution of external tools with full output capture.
//!
//! # Design
//! - The calling thread blocks until the child exits; no timeout, no streaming.
//! - All logging happens before the return-code check so failure diagnostics always reach the
//!   correlation-bound logger.
//! - No logger means no logging, whatever the option flags say.

use std::process::{Command, ExitStatus};

use docket_telemetry::GroupLogger;
use tracing::debug;

use crate::error::{ProcessError, RunResult};
use crate::invocation::ProcessInvocation;
use crate::options::CaptureOptions;
use crate::output::{ProcessResult, parse_output_lines};

/// Run `invocation` to completion, capturing stdout and stderr in memory.
///
/// When `logger` is present the enabled parts of `options` are logged under
/// the logger's correlation identifier: the exit code at debug level, a
/// `"stderr:"` marker followed by each stderr line at warning level, and a
/// `"stdout:"` marker followed by each stdout line at debug level. Markers are
/// only written for non-empty streams.
///
/// # Errors
///
/// Returns [`ProcessError::Launch`] when the program cannot be started (for
/// example because it does not exist) and [`ProcessError::CommandFailed`] when
/// `options.check_return` is set and the exit code is non-zero.
pub fn run_process_with_capture(
    invocation: &ProcessInvocation,
    options: CaptureOptions,
    logger: Option<&GroupLogger>,
) -> RunResult<ProcessResult> {
    let program = invocation.program();
    let mut command = Command::new(program);
    command.args(invocation.args());
    if let Some(env) = invocation.env() {
        command.env_clear().envs(env);
    }

    debug!(program, args = ?invocation.args(), "launching external command");
    let output = command.output().map_err(|source| ProcessError::Launch {
        program: program.to_string(),
        source,
    })?;
    let result = ProcessResult::new(exit_code(output.status), output.stdout, output.stderr);

    if let Some(logger) = logger {
        log_captured(logger, program, &result, options);
    }

    if options.check_return && !result.success() {
        return Err(ProcessError::CommandFailed {
            program: program.to_string(),
            exit_code: result.exit_code(),
            output: Box::new(result),
        });
    }
    Ok(result)
}

fn log_captured(
    logger: &GroupLogger,
    program: &str,
    result: &ProcessResult,
    options: CaptureOptions,
) {
    if options.log_return {
        logger.debug(&format!("{program} exited {}", result.exit_code()));
    }

    if options.log_stderr && !result.stderr().is_empty() {
        logger.warning("stderr:");
        for line in parse_output_lines(result.stderr()) {
            logger.warning(&line);
        }
    }

    if options.log_stdout && !result.stdout().is_empty() {
        logger.debug("stdout:");
        for line in parse_output_lines(result.stdout()) {
            logger.debug(&line);
        }
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
