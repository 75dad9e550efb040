//! Gateway for pull request operations backed by the `gh` executable.

use crate::process::{CommandRunner, ProcessError, run_checked};

/// Name of the GitHub CLI executable.
pub const GH_PROGRAM: &str = "gh";

/// Gateway that can create and edit pull requests.
#[cfg_attr(test, mockall::automock)]
pub trait PullRequestGateway {
    /// Opens a pull request for the current branch and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] when the pull request cannot be created.
    fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        base: Option<String>,
    ) -> Result<String, ProcessError>;

    /// Requests a review from `reviewer` on the pull request at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] when the reviewer cannot be added.
    fn add_reviewer(&self, url: &str, reviewer: &str) -> Result<(), ProcessError>;

    /// Assigns `assignee` to the pull request at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] when the assignee cannot be added.
    fn add_assignee(&self, url: &str, assignee: &str) -> Result<(), ProcessError>;
}

/// [`PullRequestGateway`] that shells out to `gh pr create` and `gh pr edit`.
#[derive(Debug)]
pub struct GhCliGateway<'runner, Runner>
where
    Runner: CommandRunner + ?Sized,
{
    runner: &'runner Runner,
}

impl<'runner, Runner> GhCliGateway<'runner, Runner>
where
    Runner: CommandRunner + ?Sized,
{
    /// Creates a gateway that runs `gh` through `runner`.
    #[must_use]
    pub const fn new(runner: &'runner Runner) -> Self {
        Self { runner }
    }
}

impl<Runner> PullRequestGateway for GhCliGateway<'_, Runner>
where
    Runner: CommandRunner + ?Sized,
{
    fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        base: Option<String>,
    ) -> Result<String, ProcessError> {
        let args = create_args(title, body, base.as_deref());
        let stdout = run_checked(self.runner, GH_PROGRAM, &args)?;
        Ok(stdout.trim().to_owned())
    }

    fn add_reviewer(&self, url: &str, reviewer: &str) -> Result<(), ProcessError> {
        let args = edit_args(url, "--add-reviewer", reviewer);
        run_checked(self.runner, GH_PROGRAM, &args).map(drop)
    }

    fn add_assignee(&self, url: &str, assignee: &str) -> Result<(), ProcessError> {
        let args = edit_args(url, "--add-assignee", assignee);
        run_checked(self.runner, GH_PROGRAM, &args).map(drop)
    }
}

pub(crate) fn create_args(title: &str, body: &str, base: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "pr".to_owned(),
        "create".to_owned(),
        "--title".to_owned(),
        title.to_owned(),
        "--body".to_owned(),
        body.to_owned(),
    ];
    if let Some(branch) = base {
        args.push("--base".to_owned());
        args.push(branch.to_owned());
    }
    args
}

pub(crate) fn edit_args(url: &str, flag: &str, value: &str) -> Vec<String> {
    vec![
        "pr".to_owned(),
        "edit".to_owned(),
        url.to_owned(),
        flag.to_owned(),
        value.to_owned(),
    ]
}
