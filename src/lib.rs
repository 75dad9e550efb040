//! gh-createpr library crate.
//!
//! The library creates GitHub pull requests through the `gh` CLI and keeps a
//! small per-user YAML configuration of reviewers, assignee, and target
//! branch that is applied to every new pull request.

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod local;
pub mod process;

pub use config::{Config, ConfigError, ConfigStore};
pub use error::{AppError, ErrorKind};
pub use github::{PullRequestRequest, PullRequestSubmission, SubmissionOutcome};
pub use process::{CommandRunner, ProcessError, SystemCommandRunner};
