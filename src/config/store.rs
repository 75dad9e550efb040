//! File-backed configuration store.

use camino::{Utf8Path, Utf8PathBuf};

use super::error::ConfigError;
use super::location::default_config_path;
use super::{Config, fs};

/// Result of loading the configuration, noting whether it was just created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The configuration record read from disk.
    pub config: Config,
    /// True when no file existed and the default record was written.
    pub created: bool,
}

/// Reads and writes the configuration record at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: Utf8PathBuf,
}

impl ConfigStore {
    /// Creates a store bound to `path`. Nothing is read until first use.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the per-user default location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnresolvedLocation`] when no home or config
    /// directory can be determined.
    pub fn at_default_location() -> Result<Self, ConfigError> {
        default_config_path().map(Self::new)
    }

    /// Returns the configuration file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        self.path.as_path()
    }

    /// Loads the configuration, creating the default record when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read or the default
    /// record cannot be written, and [`ConfigError::Parse`] when the content
    /// is malformed.
    pub fn load(&self) -> Result<Config, ConfigError> {
        self.load_with_status().map(|loaded| loaded.config)
    }

    /// Loads the configuration and reports whether the default record had to
    /// be created.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::load`].
    pub fn load_with_status(&self) -> Result<LoadedConfig, ConfigError> {
        if let Some(content) = fs::read_if_present(&self.path)? {
            return Ok(LoadedConfig {
                config: self.parse(&content)?,
                created: false,
            });
        }

        tracing::info!("configuration file '{}' not found; creating default", self.path);
        self.save(&Config::default())?;

        let content = fs::read_if_present(&self.path)?.ok_or_else(|| ConfigError::Io {
            path: self.path.clone(),
            message: "default configuration vanished after being written".to_owned(),
        })?;

        Ok(LoadedConfig {
            config: self.parse(&content)?,
            created: true,
        })
    }

    /// Serialises `config` and replaces the file with it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialise`] when serialisation fails and
    /// [`ConfigError::Io`] when the file cannot be written.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let yaml = config.to_yaml()?;
        fs::write_replacing(&self.path, &yaml)?;
        tracing::debug!("saved configuration to '{}'", self.path);
        Ok(())
    }

    /// Adds a reviewer and saves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReviewerAlreadyExists`] when the reviewer is
    /// already configured (the file is left untouched), or any load/save
    /// error.
    pub fn add_reviewer(&self, name: &str) -> Result<(), ConfigError> {
        self.update(|config| config.add_reviewer(name))
    }

    /// Removes a reviewer and saves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReviewerNotFound`] when the reviewer is not
    /// configured (the file is left untouched), or any load/save error.
    pub fn remove_reviewer(&self, name: &str) -> Result<(), ConfigError> {
        self.update(|config| config.remove_reviewer(name))
    }

    /// Overwrites the assignee and saves.
    ///
    /// # Errors
    ///
    /// Returns any load/save error.
    pub fn set_assignee(&self, name: &str) -> Result<(), ConfigError> {
        self.update(|config| {
            name.clone_into(&mut config.assignee);
            Ok(())
        })
    }

    /// Overwrites the target branch and saves.
    ///
    /// # Errors
    ///
    /// Returns any load/save error.
    pub fn set_target_branch(&self, branch: &str) -> Result<(), ConfigError> {
        self.update(|config| {
            branch.clone_into(&mut config.target_branch);
            Ok(())
        })
    }

    /// Returns the configured reviewers.
    ///
    /// # Errors
    ///
    /// Returns any load error.
    pub fn list_reviewers(&self) -> Result<Vec<String>, ConfigError> {
        self.load().map(|config| config.reviewers)
    }

    /// Returns the whole configuration record.
    ///
    /// # Errors
    ///
    /// Returns any load error.
    pub fn list_all(&self) -> Result<Config, ConfigError> {
        self.load()
    }

    /// Returns the file content exactly as stored, after validating it.
    ///
    /// Comments and key order from a hand-edited file are preserved.
    ///
    /// # Errors
    ///
    /// Returns any load error.
    pub fn contents(&self) -> Result<String, ConfigError> {
        self.load()?;
        fs::read_if_present(&self.path)?.ok_or_else(|| ConfigError::Io {
            path: self.path.clone(),
            message: "configuration file vanished after loading".to_owned(),
        })
    }

    /// Returns the configured assignee.
    ///
    /// # Errors
    ///
    /// Returns any load error.
    pub fn assignee(&self) -> Result<String, ConfigError> {
        self.load().map(|config| config.assignee)
    }

    /// Returns the configured target branch (empty when not overridden).
    ///
    /// # Errors
    ///
    /// Returns any load error.
    pub fn target_branch(&self) -> Result<String, ConfigError> {
        self.load().map(|config| config.target_branch)
    }

    /// Loads, applies `edit`, and saves only when the edit succeeds.
    fn update<F>(&self, edit: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Config) -> Result<(), ConfigError>,
    {
        let mut config = self.load()?;
        edit(&mut config)?;
        self.save(&config)
    }

    fn parse(&self, content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(content).map_err(|error| ConfigError::Parse {
            path: self.path.clone(),
            message: error.to_string(),
        })
    }
}
