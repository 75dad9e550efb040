//! Persisted user preferences for pull request creation.
//!
//! The configuration is a single YAML record stored per user:
//!
//! ```yaml
//! reviewers:
//!   - octocat
//!   - hubot
//! assignee: '@me'
//! target_branch: main
//! ```
//!
//! `target_branch` is omitted from the file when empty. Fields missing from
//! the file take their values from [`Config::default`], and an empty file is
//! read as the default record.
//!
//! [`ConfigStore`] owns the file location and exposes the read and mutate
//! operations. Every mutation loads the current record, validates the edit,
//! and only then rewrites the whole file.

mod error;
mod fs;
mod location;
mod store;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use location::{CONFIG_FILE_NAME, default_config_path};
pub use store::{ConfigStore, LoadedConfig};

/// Assignee used when none has been configured; `gh` resolves it to the
/// authenticated user.
pub const DEFAULT_ASSIGNEE: &str = "@me";

/// The persisted configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reviewers attached to every new pull request, in insertion order.
    pub reviewers: Vec<String>,

    /// Identity assigned to every new pull request.
    pub assignee: String,

    /// Base branch override for new pull requests; empty means the
    /// repository default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_branch: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reviewers: Vec::new(),
            assignee: DEFAULT_ASSIGNEE.to_owned(),
            target_branch: String::new(),
        }
    }
}

impl Config {
    /// Returns true when `name` is a configured reviewer.
    #[must_use]
    pub fn has_reviewer(&self, name: &str) -> bool {
        self.reviewers.iter().any(|reviewer| reviewer == name)
    }

    /// Appends a reviewer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReviewerAlreadyExists`] when `name` is already
    /// configured; the list is left unchanged.
    pub fn add_reviewer(&mut self, name: &str) -> Result<(), ConfigError> {
        if self.has_reviewer(name) {
            return Err(ConfigError::ReviewerAlreadyExists {
                name: name.to_owned(),
            });
        }

        self.reviewers.push(name.to_owned());
        Ok(())
    }

    /// Removes the first entry matching `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReviewerNotFound`] when `name` is not configured.
    pub fn remove_reviewer(&mut self, name: &str) -> Result<(), ConfigError> {
        let position = self
            .reviewers
            .iter()
            .position(|reviewer| reviewer == name)
            .ok_or_else(|| ConfigError::ReviewerNotFound {
                name: name.to_owned(),
            })?;

        self.reviewers.remove(position);
        Ok(())
    }

    /// Returns the target branch, or `None` when no override is configured.
    #[must_use]
    pub fn target_branch_override(&self) -> Option<&str> {
        Some(self.target_branch.as_str()).filter(|branch| !branch.is_empty())
    }

    /// Serialises the record to YAML in the on-disk format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialise`] when YAML serialisation fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|error| ConfigError::Serialise {
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
