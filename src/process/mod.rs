//! External process execution.
//!
//! Both collaborators this tool drives, the GitHub CLI and Git, are plain
//! executables on `PATH`. This module defines a trait-based seam for running
//! them so that tests can substitute a mock without spawning real processes.

mod error;

use std::process::Command;

pub use error::ProcessError;

/// Captured result of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    /// Whether the process reported success.
    pub success: bool,
    /// Captured standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Captured standard error, decoded lossily as UTF-8.
    pub stderr: String,
}

impl CommandOutput {
    /// Builds a successful output carrying `stdout`.
    #[must_use]
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Builds a failed output with the given exit code and `stderr`.
    #[must_use]
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Returns stdout when the command succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Failed`] carrying the captured stderr when the
    /// command exited unsuccessfully.
    pub fn into_stdout(self, program: &str, args: &[String]) -> Result<String, ProcessError> {
        if self.success {
            return Ok(self.stdout);
        }

        Err(ProcessError::Failed {
            command: render_command(program, args),
            status: self.status,
            stderr: self.stderr.trim().to_owned(),
        })
    }
}

/// Runs external programs and captures their output.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `program` with `args` to completion.
    ///
    /// A non-zero exit is reported through [`CommandOutput::success`], not as
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Spawn`] when the program cannot be started.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ProcessError>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ProcessError> {
        tracing::debug!("running `{}`", render_command(program, args));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|error| ProcessError::Spawn {
                program: program.to_owned(),
                message: error.to_string(),
            })?;

        Ok(CommandOutput {
            status: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs a command and returns its stdout, treating a non-zero exit as an error.
///
/// # Errors
///
/// Returns [`ProcessError::Spawn`] when the program cannot be started and
/// [`ProcessError::Failed`] when it exits unsuccessfully.
pub fn run_checked<R>(runner: &R, program: &str, args: &[String]) -> Result<String, ProcessError>
where
    R: CommandRunner + ?Sized,
{
    runner.run(program, args)?.into_stdout(program, args)
}

/// Formats a program and its arguments for logs and error messages.
pub(crate) fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = program.to_owned();
    for arg in args {
        rendered.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(arg);
            rendered.push('"');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}
