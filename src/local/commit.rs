//! Last commit message lookup.

use crate::process::{CommandRunner, ProcessError, run_checked};

/// Name of the Git executable.
pub const GIT_PROGRAM: &str = "git";

/// Returns the full message of `HEAD`, trimmed of surrounding whitespace.
///
/// # Errors
///
/// Returns [`ProcessError`] when `git` cannot be run or exits unsuccessfully
/// (for example, outside a repository or before the first commit).
pub fn last_commit_message<R>(runner: &R) -> Result<String, ProcessError>
where
    R: CommandRunner + ?Sized,
{
    let stdout = run_checked(runner, GIT_PROGRAM, &log_args())?;
    Ok(stdout.trim().to_owned())
}

fn log_args() -> Vec<String> {
    vec!["log".to_owned(), "-1".to_owned(), "--pretty=%B".to_owned()]
}
