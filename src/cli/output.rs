//! Output formatting for CLI operations.

use std::fmt::Write as _;

use crate::config::ConfigError;
use crate::github::{PullRequestRequest, SubmissionOutcome};

/// Renders the reviewer list as a YAML sequence (`[]` when empty).
///
/// # Errors
///
/// Returns [`ConfigError::Serialise`] when YAML serialisation fails.
pub fn render_reviewers(reviewers: &[String]) -> Result<String, ConfigError> {
    serde_yaml::to_string(reviewers).map_err(|error| ConfigError::Serialise {
        message: error.to_string(),
    })
}

/// Describes the pull request about to be created.
#[must_use]
pub fn render_creation_notice(request: &PullRequestRequest) -> String {
    let mut notice = format!("Creating PR with title: [{}]", request.title);
    if !request.body.is_empty() {
        let _ignored = write!(notice, " and body: {}", request.body);
    }
    if let Some(branch) = request.target_branch.as_deref() {
        let _ignored = write!(notice, " into {branch}");
    }
    notice
}

/// Summarises a completed submission, one line per fact.
#[must_use]
pub fn render_outcome(outcome: &SubmissionOutcome) -> String {
    let mut summary = format!("Pull Request created: {}\n", outcome.url);

    if !outcome.reviewers_added.is_empty() {
        let _ignored = writeln!(
            summary,
            "Reviewers added: {}",
            outcome.reviewers_added.join(", ")
        );
    }
    for failure in &outcome.reviewer_failures {
        let _ignored = writeln!(
            summary,
            "Could not add reviewer {}: {}",
            failure.reviewer, failure.error
        );
    }
    let _ignored = writeln!(summary, "Assignee set: {}", outcome.assignee);

    summary
}
