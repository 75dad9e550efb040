//! Error types for the configuration store.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading, mutating, or saving the configuration file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("configuration I/O error on '{path}': {message}")]
    Io {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The configuration file is not valid YAML for the expected record.
    #[error("configuration file '{path}' is malformed: {message}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Error detail from the YAML parser.
        message: String,
    },

    /// The configuration could not be serialised.
    #[error("failed to serialise configuration: {message}")]
    Serialise {
        /// Error detail from the YAML serialiser.
        message: String,
    },

    /// The reviewer is already configured.
    #[error("Reviewer {name} already exists.")]
    ReviewerAlreadyExists {
        /// Reviewer that was being added.
        name: String,
    },

    /// The reviewer is not configured.
    #[error("Reviewer {name} not found.")]
    ReviewerNotFound {
        /// Reviewer that was being removed.
        name: String,
    },

    /// No default location for the configuration file could be derived.
    #[error(
        "unable to resolve configuration directory: neither XDG_CONFIG_HOME nor HOME is set \
         (use --config to choose a path)"
    )]
    UnresolvedLocation,
}

impl ConfigError {
    /// Returns true for errors caused by invalid reviewer edits rather than
    /// by the file itself.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ReviewerAlreadyExists { .. } | Self::ReviewerNotFound { .. }
        )
    }
}
