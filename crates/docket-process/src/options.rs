//! Switches controlling what a captured run logs and whether it checks the exit code.

use serde::{Deserialize, Serialize};

/// Logging and return-code behaviour for [`crate::run_process_with_capture`].
///
/// Logging flags only take effect when a logger is supplied; `check_return` is
/// independent of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CaptureOptions {
    /// Log `"<program> exited <code>"` at debug level.
    pub log_return: bool,
    /// Log captured standard error at warning level.
    pub log_stderr: bool,
    /// Log captured standard output at debug level.
    pub log_stdout: bool,
    /// Fail with [`crate::ProcessError::CommandFailed`] on a non-zero exit code.
    pub check_return: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            log_return: true,
            log_stderr: true,
            log_stdout: true,
            check_return: false,
        }
    }
}

impl CaptureOptions {
    /// Options that log nothing and do not check the exit code.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            log_return: false,
            log_stderr: false,
            log_stdout: false,
            check_return: false,
        }
    }

    /// Enable or disable return-code checking.
    #[must_use]
    pub const fn with_check_return(mut self, check_return: bool) -> Self {
        self.check_return = check_return;
        self
    }

    /// Enable or disable standard output logging.
    #[must_use]
    pub const fn with_log_stdout(mut self, log_stdout: bool) -> Self {
        self.log_stdout = log_stdout;
        self
    }

    /// Enable or disable standard error logging.
    #[must_use]
    pub const fn with_log_stderr(mut self, log_stderr: bool) -> Self {
        self.log_stderr = log_stderr;
        self
    }

    /// Enable or disable the exit-code line.
    #[must_use]
    pub const fn with_log_return(mut self, log_return: bool) -> Self {
        self.log_return = log_return;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_everything_without_checking() {
        let options = CaptureOptions::default();
        assert!(options.log_return && options.log_stderr && options.log_stdout);
        assert!(!options.check_return);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() -> Result<(), serde_json::Error> {
        let options: CaptureOptions =
            serde_json::from_str(r#"{"check_return": true, "log_stdout": false}"#)?;
        assert_eq!(
            options,
            CaptureOptions::default()
                .with_check_return(true)
                .with_log_stdout(false)
        );
        Ok(())
    }

    #[test]
    fn quiet_disables_every_switch() {
        let quiet = CaptureOptions::quiet();
        assert_eq!(
            quiet,
            CaptureOptions::default()
                .with_log_return(false)
                .with_log_stderr(false)
                .with_log_stdout(false)
        );
    }
}
