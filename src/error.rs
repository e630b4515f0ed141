//! Domain-specific error types for the bootstrap engine.
//!
//! Internal modules return [`SetupError`] while command handlers at the CLI
//! boundary convert it to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error taxonomy
//!
//! ```text
//! SetupError
//! ├── LaunchFailed          : package manager could not be spawned
//! ├── ToolFailed            : package manager exited non-zero
//! ├── PromptCancelled       : operator aborted an interactive prompt
//! ├── FilesystemWriteFailed : generated file could not be written
//! ├── FilesystemBackupFailed: existing file could not be moved aside
//! └── InvalidConfig         : `spellbookx.toml` could not be parsed
//! ```
//!
//! A project without any lock file is not an error: the prober falls back
//! to npm and the orchestrator logs a warning.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two install invocations of a routine is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    /// Global-scope install (`-g`).
    Global,
    /// Project dev-scope install (`-D`).
    Dev,
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global package installation"),
            Self::Dev => write!(f, "dev dependency installation"),
        }
    }
}

/// Fatal errors of a bootstrap run.
///
/// Every variant halts the current routine and all routines after it.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The package manager executable could not be launched.
    #[error("{step} failed: could not launch '{program}': {cause}")]
    LaunchFailed {
        /// Program that was invoked.
        program: String,
        /// Install step that was running.
        step: InstallStep,
        /// Description of the spawn failure.
        cause: String,
    },

    /// The package manager ran but reported failure.
    #[error("{step} failed: '{program}' exited with code {exit_code}")]
    ToolFailed {
        /// Program that was invoked.
        program: String,
        /// Install step that was running.
        step: InstallStep,
        /// Exit code, or `-1` when the process was terminated by a signal.
        exit_code: i32,
    },

    /// The operator aborted an interactive prompt.
    #[error("prompt cancelled: {prompt}")]
    PromptCancelled {
        /// The question that was being asked.
        prompt: String,
    },

    /// A generated file could not be written.
    #[error("failed to write {}", path.display())]
    FilesystemWriteFailed {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An existing file or backup could not be renamed out of the way.
    #[error("failed to back up {} to {}", path.display(), backup.display())]
    FilesystemBackupFailed {
        /// File that was being moved.
        path: PathBuf,
        /// Intended backup location.
        backup: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The project settings file is malformed.
    #[error("invalid configuration in {}: {message}", path.display())]
    InvalidConfig {
        /// Settings file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl SetupError {
    /// Build a [`SetupError::FilesystemWriteFailed`] for `path`.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FilesystemWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Build a [`SetupError::PromptCancelled`] for `prompt`.
    pub fn cancelled(prompt: impl Into<String>) -> Self {
        Self::PromptCancelled {
            prompt: prompt.into(),
        }
    }
}
