//! Command-line flags and the action they select.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "gh-createpr",
    version,
    about = "Create a pull request with gh and attach your usual reviewers and assignee"
)]
pub struct CliArgs {
    /// Pull request title; prompted for when omitted.
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Pull request body; prompted for when omitted.
    #[arg(long, value_name = "BODY")]
    pub body: Option<String>,

    /// Print the whole configuration and exit.
    #[arg(long)]
    pub list: bool,

    /// Print the configured reviewers and exit.
    #[arg(long)]
    pub list_reviewers: bool,

    /// Add a reviewer to the configuration and exit.
    #[arg(long, value_name = "NAME")]
    pub add_reviewer: Option<String>,

    /// Remove a reviewer from the configuration and exit.
    #[arg(long, value_name = "NAME")]
    pub remove_reviewer: Option<String>,

    /// Save a new assignee before creating the pull request.
    #[arg(long, value_name = "NAME")]
    pub assignee: Option<String>,

    /// Save the target (base) branch for new pull requests and exit.
    #[arg(long, value_name = "BRANCH")]
    pub set_target_branch: Option<String>,

    /// Configuration file to use instead of the per-user default.
    #[arg(long, value_name = "PATH", env = "GH_CREATEPR_CONFIG")]
    pub config: Option<Utf8PathBuf>,
}

/// Options for the pull request creation path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Title from `--title`, if given.
    pub title: Option<String>,
    /// Body from `--body`, if given.
    pub body: Option<String>,
    /// Assignee from `--assignee`, saved before the pull request is created.
    pub assignee: Option<String>,
}

/// The single top-level action selected by the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the whole configuration.
    ListAll,
    /// Print the configured reviewers.
    ListReviewers,
    /// Add a reviewer.
    AddReviewer(String),
    /// Remove a reviewer.
    RemoveReviewer(String),
    /// Save the target branch.
    SetTargetBranch(String),
    /// Create a pull request.
    CreatePullRequest(CreateOptions),
}

impl CliArgs {
    /// Resolves the action, checking flags in fixed priority order.
    ///
    /// Configuration actions win over pull request creation; among them the
    /// order is list, list reviewers, add reviewer, remove reviewer, set
    /// target branch. Empty string values count as absent.
    #[must_use]
    pub fn action(&self) -> Action {
        if self.list {
            Action::ListAll
        } else if self.list_reviewers {
            Action::ListReviewers
        } else if let Some(name) = non_empty(self.add_reviewer.as_deref()) {
            Action::AddReviewer(name)
        } else if let Some(name) = non_empty(self.remove_reviewer.as_deref()) {
            Action::RemoveReviewer(name)
        } else if let Some(branch) = non_empty(self.set_target_branch.as_deref()) {
            Action::SetTargetBranch(branch)
        } else {
            Action::CreatePullRequest(CreateOptions {
                title: non_empty(self.title.as_deref()),
                body: non_empty(self.body.as_deref()),
                assignee: non_empty(self.assignee.as_deref()),
            })
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|text| !text.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{Action, CliArgs, CreateOptions};

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("gh-createpr").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[rstest]
    #[case::list_beats_everything(
        &["--list", "--list-reviewers", "--add-reviewer=a", "--set-target-branch=main"],
        Action::ListAll
    )]
    #[case::list_reviewers_beats_mutations(
        &["--list-reviewers", "--add-reviewer=a", "--remove-reviewer=b"],
        Action::ListReviewers
    )]
    #[case::add_beats_remove(
        &["--add-reviewer=a", "--remove-reviewer=b"],
        Action::AddReviewer("a".to_owned())
    )]
    #[case::remove_beats_target_branch(
        &["--remove-reviewer=b", "--set-target-branch=main"],
        Action::RemoveReviewer("b".to_owned())
    )]
    #[case::target_branch_beats_creation(
        &["--set-target-branch=main", "--title=T"],
        Action::SetTargetBranch("main".to_owned())
    )]
    fn actions_resolve_in_priority_order(#[case] args: &[&str], #[case] expected: Action) {
        assert_eq!(parse(args).action(), expected);
    }

    #[rstest]
    fn no_action_flags_create_a_pull_request() {
        let action = parse(&["--title", "Fix bug", "--body=Details", "--assignee=octocat"]).action();

        assert_eq!(
            action,
            Action::CreatePullRequest(CreateOptions {
                title: Some("Fix bug".to_owned()),
                body: Some("Details".to_owned()),
                assignee: Some("octocat".to_owned()),
            })
        );
    }

    #[rstest]
    fn empty_values_count_as_absent() {
        let action = parse(&["--add-reviewer=", "--title=", "--body="]).action();

        assert_eq!(action, Action::CreatePullRequest(CreateOptions::default()));
    }

    #[rstest]
    fn config_path_flag_is_parsed() {
        let args = parse(&["--config", "/tmp/custom.yml", "--list"]);

        assert_eq!(
            args.config.as_ref().map(|path| path.as_str()),
            Some("/tmp/custom.yml")
        );
    }

    #[rstest]
    fn unknown_flag_is_rejected() {
        let result =
            CliArgs::try_parse_from(["gh-createpr", "--reviewer", "alice"].iter().copied());

        assert!(result.is_err(), "unknown flag should be rejected");
    }
}
