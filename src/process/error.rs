//! Error types for external process execution.

use thiserror::Error;

/// Errors raised while running the GitHub CLI or Git.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// The program could not be started (for example, it is not on `PATH`).
    #[error("failed to launch {program}: {message}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Error detail from the operating system.
        message: String,
    },

    /// The program ran but exited unsuccessfully.
    #[error("`{command}` failed {}{}", describe_status(*.status), describe_stderr(.stderr))]
    Failed {
        /// Rendered command line.
        command: String,
        /// Exit code, or `None` when terminated by a signal.
        status: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("with exit status {code}"),
        None => "after being terminated by a signal".to_owned(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\nDetail: {stderr}")
    }
}
