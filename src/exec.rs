//! External process execution.
//!
//! Package managers are invoked directly with an argument vector (never
//! through a shell) and inherit the standard streams, so install progress is
//! visible to the operator in real time.
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{InstallStep, SetupError};

/// Classified result of running an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The process exited with status zero.
    Succeeded,
    /// The process ran but exited non-zero (`-1` when killed by a signal).
    ToolFailed {
        /// Exit code reported by the tool.
        exit_code: i32,
    },
    /// The process could not be started at all.
    LaunchFailed {
        /// Description of the spawn error.
        cause: String,
    },
}

impl ProcessOutcome {
    /// Returns `true` for [`ProcessOutcome::Succeeded`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Convert a non-success outcome into the matching [`SetupError`].
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ToolFailed`] or [`SetupError::LaunchFailed`]
    /// for the respective outcomes.
    pub fn into_result(self, program: &str, step: InstallStep) -> Result<(), SetupError> {
        match self {
            Self::Succeeded => Ok(()),
            Self::ToolFailed { exit_code } => Err(SetupError::ToolFailed {
                program: program.to_string(),
                step,
                exit_code,
            }),
            Self::LaunchFailed { cause } => Err(SetupError::LaunchFailed {
                program: program.to_string(),
                step,
                cause,
            }),
        }
    }
}

/// Abstraction over process execution so routines can be tested without
/// spawning real package managers.
#[cfg_attr(test, mockall::automock)]
pub trait Executor: Send + Sync {
    /// Run `program` with `args` in `dir`, inheriting stdin/stdout/stderr,
    /// and block until it exits.
    fn run_inherited(&self, dir: &Path, program: &str, args: &[String]) -> ProcessOutcome;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// Production [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl SystemExecutor {
    /// Resolve `program` through PATH.
    ///
    /// On Windows this maps `npm` to `npm.cmd`, which `Command` would not
    /// find on its own without a shell.  Falls back to the bare name so
    /// that a missing tool surfaces as a launch failure.
    fn resolve(program: &str) -> PathBuf {
        which::which(program).unwrap_or_else(|_| PathBuf::from(program))
    }
}

impl Executor for SystemExecutor {
    fn run_inherited(&self, dir: &Path, program: &str, args: &[String]) -> ProcessOutcome {
        let status = Command::new(Self::resolve(program))
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Err(e) => ProcessOutcome::LaunchFailed {
                cause: e.to_string(),
            },
            Ok(status) if status.success() => ProcessOutcome::Succeeded,
            Ok(status) => ProcessOutcome::ToolFailed {
                exit_code: status.code().unwrap_or(-1),
            },
        }
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
