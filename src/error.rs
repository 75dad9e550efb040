//! Top-level error type surfaced by the CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::process::ProcessError;

/// Broad category of an [`AppError`], used to choose the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration file could not be read or written.
    ConfigIo,
    /// The configuration file is malformed.
    ConfigParse,
    /// A reviewer edit was rejected (duplicate or missing reviewer).
    Validation,
    /// `gh` or `git` failed to start or exited unsuccessfully.
    ExternalProcess,
    /// Reading from or writing to the terminal failed.
    Terminal,
}

impl ErrorKind {
    /// Process exit code reported for this kind of failure.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::ConfigIo
            | Self::ConfigParse
            | Self::Validation
            | Self::ExternalProcess
            | Self::Terminal => 1,
        }
    }
}

/// Any failure that ends a CLI run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration store failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// External process failure.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Reading interactive input failed or input ended early.
    #[error("failed to read input: {message}")]
    Prompt {
        /// Details about the input failure.
        message: String,
    },

    /// Writing output failed.
    #[error("failed to write output: {message}")]
    Output {
        /// Error detail from the underlying writer.
        message: String,
    },
}

impl AppError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(ConfigError::Parse { .. }) => ErrorKind::ConfigParse,
            Self::Config(error) if error.is_validation() => ErrorKind::Validation,
            Self::Config(_) => ErrorKind::ConfigIo,
            Self::Process(_) => ErrorKind::ExternalProcess,
            Self::Prompt { .. } | Self::Output { .. } => ErrorKind::Terminal,
        }
    }

    /// Process exit code reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}
