//! Inputs and results of a pull request submission.

use crate::process::ProcessError;

/// Everything needed to open a pull request and attach people to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestRequest {
    /// Pull request title.
    pub title: String,
    /// Pull request body; may be empty.
    pub body: String,
    /// Identity to assign (`@me` for the authenticated user).
    pub assignee: String,
    /// Reviewers to request, attached one at a time.
    pub reviewers: Vec<String>,
    /// Base branch override; `None` uses the repository default.
    pub target_branch: Option<String>,
}

/// A reviewer that could not be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerFailure {
    /// Reviewer login or team slug.
    pub reviewer: String,
    /// Failure reported by `gh`.
    pub error: ProcessError,
}

/// Result of a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// URL of the created pull request.
    pub url: String,
    /// Reviewers attached successfully, in request order.
    pub reviewers_added: Vec<String>,
    /// Reviewers whose attachment failed.
    pub reviewer_failures: Vec<ReviewerFailure>,
    /// Assignee set on the pull request.
    pub assignee: String,
}
