//! Immutable description of one external command execution.

use std::collections::BTreeMap;

use crate::error::{ProcessError, RunResult};

/// Argument vector plus environment for one command.
///
/// The first element is the program; it is executed directly, never through a
/// shell. The environment is either inherited in full (`None`) or replaced in
/// full by the supplied map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    command: Vec<String>,
    env: Option<BTreeMap<String, String>>,
}

impl ProcessInvocation {
    /// Build an invocation that inherits the caller's environment.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::EmptyCommand`] when `command` has no elements.
    pub fn new<I, S>(command: I) -> RunResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command: Vec<String> = command.into_iter().map(Into::into).collect();
        if command.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }
        Ok(Self { command, env: None })
    }

    /// Replace the child's entire environment with `env`.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, env: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            env.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Full argument vector, program first.
    #[must_use]
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Program name or path.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.command[0]
    }

    /// Arguments after the program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.command[1..]
    }

    /// Replacement environment, or `None` when inherited.
    #[must_use]
    pub const fn env(&self) -> Option<&BTreeMap<String, String>> {
        self.env.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_program_from_arguments() -> RunResult<()> {
        let invocation = ProcessInvocation::new(["ocrmypdf", "--skip-text", "in.pdf"])?;
        assert_eq!(invocation.program(), "ocrmypdf");
        assert_eq!(invocation.args(), ["--skip-text", "in.pdf"]);
        assert_eq!(invocation.command().len(), 3);
        assert!(invocation.env().is_none());
        Ok(())
    }

    #[test]
    fn empty_command_is_rejected() {
        let result = ProcessInvocation::new(Vec::<String>::new());
        assert!(matches!(result, Err(ProcessError::EmptyCommand)));
    }

    #[test]
    fn with_env_replaces_environment() -> RunResult<()> {
        let invocation = ProcessInvocation::new(["convert"])?.with_env([("OMP_THREAD_LIMIT", "1")]);
        let env = invocation.env().cloned().unwrap_or_default();
        assert_eq!(env.get("OMP_THREAD_LIMIT").map(String::as_str), Some("1"));
        assert_eq!(env.len(), 1);
        assert!(invocation.args().is_empty());
        Ok(())
    }
}
