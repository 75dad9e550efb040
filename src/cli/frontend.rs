//! Dispatch of the selected action.

use std::io::{BufRead, Write};

use super::args::{Action, CliArgs, CreateOptions};
use super::console::Console;
use super::output::{render_creation_notice, render_outcome, render_reviewers};
use crate::config::ConfigStore;
use crate::error::AppError;
use crate::github::{GhCliGateway, PullRequestRequest, PullRequestSubmission};
use crate::local::last_commit_message;
use crate::process::CommandRunner;

const TITLE_PROMPT: &str = "Enter Pull Request Title";
const BODY_PROMPT: &str = "Enter Pull Request Body";

/// Runs the action selected by `args`.
///
/// Configuration actions only touch `store`. The pull request path prompts
/// through `console` for anything the flags did not provide and runs `gh` and
/// `git` through `runner`.
///
/// # Errors
///
/// Returns [`AppError`] for configuration, validation, external process, or
/// terminal failures.
pub fn run<Runner, Input, Output>(
    args: &CliArgs,
    store: &ConfigStore,
    runner: &Runner,
    console: &mut Console<Input, Output>,
) -> Result<(), AppError>
where
    Runner: CommandRunner + ?Sized,
    Input: BufRead,
    Output: Write,
{
    let loaded = store.load_with_status()?;
    if loaded.created {
        console.say(&format!(
            "Config file not found. Created a new one at {}.",
            store.path()
        ))?;
    }

    match args.action() {
        Action::ListAll => console.print(&store.contents()?),
        Action::ListReviewers => {
            let reviewers = store.list_reviewers()?;
            console.print(&render_reviewers(&reviewers)?)
        }
        Action::AddReviewer(name) => {
            store.add_reviewer(&name)?;
            console.say(&format!("Reviewer {name} added."))
        }
        Action::RemoveReviewer(name) => {
            store.remove_reviewer(&name)?;
            console.say(&format!("Reviewer {name} removed."))
        }
        Action::SetTargetBranch(branch) => {
            store.set_target_branch(&branch)?;
            console.say(&format!("Target branch set to {branch}."))
        }
        Action::CreatePullRequest(options) => {
            create_pull_request(&options, store, runner, console)
        }
    }
}

fn create_pull_request<Runner, Input, Output>(
    options: &CreateOptions,
    store: &ConfigStore,
    runner: &Runner,
    console: &mut Console<Input, Output>,
) -> Result<(), AppError>
where
    Runner: CommandRunner + ?Sized,
    Input: BufRead,
    Output: Write,
{
    if let Some(assignee) = options.assignee.as_deref() {
        store.set_assignee(assignee)?;
        tracing::debug!("saved assignee {assignee}");
    }
    let config = store.load()?;

    let title = match options.title.clone() {
        Some(title) => title,
        None => {
            let message = last_commit_message(runner)?;
            let subject = message.lines().next().unwrap_or_default();
            console.prompt_with_suggestion(TITLE_PROMPT, subject)?
        }
    };
    let body = match options.body.clone() {
        Some(body) => body,
        None => console.prompt(BODY_PROMPT)?,
    };

    let request = PullRequestRequest {
        title,
        body,
        target_branch: config.target_branch_override().map(str::to_owned),
        assignee: config.assignee,
        reviewers: config.reviewers,
    };
    console.say(&render_creation_notice(&request))?;

    let gateway = GhCliGateway::new(runner);
    let outcome = PullRequestSubmission::new(&gateway).submit(&request)?;

    console.print(&render_outcome(&outcome))
}
