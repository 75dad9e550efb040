//! High-level submission facade used by the CLI.

use super::gateway::PullRequestGateway;
use super::models::{PullRequestRequest, ReviewerFailure, SubmissionOutcome};
use crate::process::ProcessError;

/// Creates a pull request and attaches reviewers and an assignee.
pub struct PullRequestSubmission<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestSubmission<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new submission facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Opens the pull request, then requests each reviewer, then assigns it.
    ///
    /// Reviewer failures are logged and collected in the outcome; later
    /// reviewers are still attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] when creating the pull request or setting the
    /// assignee fails.
    pub fn submit(&self, request: &PullRequestRequest) -> Result<SubmissionOutcome, ProcessError> {
        let url = self.client.create_pull_request(
            &request.title,
            &request.body,
            request.target_branch.clone(),
        )?;
        tracing::debug!("created pull request {url}");

        let mut reviewers_added = Vec::new();
        let mut reviewer_failures = Vec::new();
        for reviewer in &request.reviewers {
            match self.client.add_reviewer(&url, reviewer) {
                Ok(()) => reviewers_added.push(reviewer.clone()),
                Err(error) => {
                    tracing::warn!("failed to add reviewer {reviewer} to {url}: {error}");
                    reviewer_failures.push(ReviewerFailure {
                        reviewer: reviewer.clone(),
                        error,
                    });
                }
            }
        }

        self.client.add_assignee(&url, &request.assignee)?;

        Ok(SubmissionOutcome {
            url,
            reviewers_added,
            reviewer_failures,
            assignee: request.assignee.clone(),
        })
    }
}
