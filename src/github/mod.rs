//! Pull request creation through the GitHub CLI.
//!
//! The [`PullRequestGateway`] trait names the three `gh` operations the tool
//! needs, [`GhCliGateway`] implements them by running the `gh` executable, and
//! [`PullRequestSubmission`] sequences them: create the pull request, attach
//! each reviewer independently, then set the assignee.

mod gateway;
mod models;
mod submission;

pub use gateway::{GH_PROGRAM, GhCliGateway, PullRequestGateway};
pub use models::{PullRequestRequest, ReviewerFailure, SubmissionOutcome};
pub use submission::PullRequestSubmission;

#[cfg(test)]
pub use gateway::MockPullRequestGateway;
