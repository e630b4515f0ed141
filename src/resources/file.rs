//! Generated configuration files and their collision policies.
use std::path::{Path, PathBuf};

use super::backup::{self, BackupReport};
use super::helpers::fs::ensure_parent_dir;
use super::{Resource, ResourceChange, ResourceState};
use crate::error::SetupError;
use crate::prompt::Prompter;

/// What to do when the target file already exists with other contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Move the existing file to `<file>.bak` (rotating older backups),
    /// then write.
    OverwriteWithBackup,
    /// Ask the operator; default answer is no. Declining keeps the file.
    ConfirmOverwrite,
    /// Leave any existing file alone.
    SkipIfExists,
}

/// Outcome of materializing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// What happened to the target.
    pub change: ResourceChange,
    /// Backup taken before writing, if any.
    pub backup: Option<BackupReport>,
}

impl From<ResourceChange> for Materialized {
    fn from(change: ResourceChange) -> Self {
        Self {
            change,
            backup: None,
        }
    }
}

/// A file to write into the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute target path.
    pub path: PathBuf,
    /// Full file contents.
    pub content: String,
    /// Collision policy for an existing target.
    pub policy: CollisionPolicy,
}

impl GeneratedFile {
    /// Create a generated file at `root/relative`.
    #[must_use]
    pub fn new(
        root: &Path,
        relative: &str,
        content: impl Into<String>,
        policy: CollisionPolicy,
    ) -> Self {
        Self {
            path: root.join(relative),
            content: content.into(),
            policy,
        }
    }

    /// File name for log messages.
    #[must_use]
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }

    /// Question asked before overwriting under
    /// [`CollisionPolicy::ConfirmOverwrite`].
    #[must_use]
    pub fn overwrite_prompt(&self) -> String {
        format!("{} already exists. Overwrite it?", self.name())
    }

    /// Write the file according to its collision policy.
    ///
    /// Under [`CollisionPolicy::OverwriteWithBackup`] the backup rename
    /// finishes before the new contents are written.
    ///
    /// # Errors
    ///
    /// - [`SetupError::FilesystemBackupFailed`] if the existing file cannot
    ///   be moved aside.
    /// - [`SetupError::FilesystemWriteFailed`] if the file cannot be written.
    /// - [`SetupError::PromptCancelled`] if the operator aborts the
    ///   overwrite confirmation.
    pub fn apply(&self, prompter: &dyn Prompter) -> Result<Materialized, SetupError> {
        let state = self.current_state()?;

        if self.policy == CollisionPolicy::SkipIfExists && state != ResourceState::Missing {
            return Ok(skipped("already present").into());
        }

        match state {
            ResourceState::Invalid { reason } => Ok(ResourceChange::Skipped { reason }.into()),
            ResourceState::Correct => Ok(ResourceChange::AlreadyCorrect.into()),
            ResourceState::Missing => {
                self.write()?;
                Ok(ResourceChange::Applied.into())
            }
            ResourceState::Incorrect { .. } => match self.policy {
                CollisionPolicy::OverwriteWithBackup => {
                    let report = backup::back_up(&self.path)?;
                    self.write()?;
                    Ok(Materialized {
                        change: ResourceChange::Applied,
                        backup: Some(report),
                    })
                }
                CollisionPolicy::ConfirmOverwrite => {
                    let prompt = self.overwrite_prompt();
                    match prompter.confirm(&prompt, false) {
                        None => Err(SetupError::cancelled(prompt)),
                        Some(false) => Ok(skipped("kept existing").into()),
                        Some(true) => {
                            self.write()?;
                            Ok(ResourceChange::Applied.into())
                        }
                    }
                }
                CollisionPolicy::SkipIfExists => Ok(skipped("already present").into()),
            },
        }
    }

    fn write(&self) -> Result<(), SetupError> {
        ensure_parent_dir(&self.path).map_err(|e| SetupError::write_failed(&self.path, e))?;
        std::fs::write(&self.path, &self.content)
            .map_err(|e| SetupError::write_failed(&self.path, e))
    }
}

fn skipped(reason: &str) -> ResourceChange {
    ResourceChange::Skipped {
        reason: reason.to_string(),
    }
}

impl Resource for GeneratedFile {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState, SetupError> {
        let Ok(meta) = self.path.symlink_metadata() else {
            return Ok(ResourceState::Missing);
        };
        if meta.is_dir() {
            return Ok(ResourceState::Invalid {
                reason: "target is a directory".to_string(),
            });
        }
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes == self.content.as_bytes() => Ok(ResourceState::Correct),
            Ok(bytes) => Ok(ResourceState::Incorrect {
                current: format!("{} bytes", bytes.len()),
            }),
            // Dangling symlinks and unreadable files are still moved aside.
            Err(e) => Ok(ResourceState::Incorrect {
                current: format!("unreadable: {e}"),
            }),
        }
    }
}
