use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Settings;
use crate::config::lockfiles::LockFileTable;
use crate::exec::Executor;
use crate::logging::Log;
use crate::presets::{EslintPreset, PrettierPreset};
use crate::prompt::Prompter;

/// Presets fixed ahead of time (command line or settings file).
///
/// A `None` entry means the operator is asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetOverrides {
    /// ESLint preset.
    pub eslint: Option<EslintPreset>,
    /// Prettier preset.
    pub prettier: Option<PrettierPreset>,
}

impl PresetOverrides {
    /// Fill unset entries from the settings file.
    #[must_use]
    pub fn or_settings(self, settings: &Settings) -> Self {
        Self {
            eslint: self.eslint.or(settings.eslint.preset),
            prettier: self.prettier.or(settings.prettier.preset),
        }
    }
}

/// Shared context for routine execution.
pub struct Context {
    /// Project root; package managers run here and files are written here.
    pub root: PathBuf,
    /// Logger for output and routine recording.
    pub log: Arc<dyn Log>,
    /// Process runner for package manager invocations.
    pub executor: Arc<dyn Executor>,
    /// Source of operator answers.
    pub prompter: Arc<dyn Prompter>,
    /// Lock-file markers used to detect the package manager.
    pub lockfiles: LockFileTable,
    /// Presets chosen ahead of time.
    pub presets: PresetOverrides,
    /// Whether to perform a dry run (report actions without applying).
    pub dry_run: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("root", &self.root)
            .field("log", &"<dyn Log>")
            .field("executor", &"<dyn Executor>")
            .field("prompter", &"<dyn Prompter>")
            .field("lockfiles", &self.lockfiles)
            .field("presets", &self.presets)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Context {
    /// Creates a new context with the built-in lock-file table, no preset
    /// overrides, and dry-run disabled.
    #[must_use]
    pub fn new(
        root: &Path,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            log,
            executor,
            prompter,
            lockfiles: LockFileTable::default(),
            presets: PresetOverrides::default(),
            dry_run: false,
        }
    }

    /// Replace the lock-file table.
    #[must_use]
    pub fn with_lockfiles(mut self, lockfiles: LockFileTable) -> Self {
        self.lockfiles = lockfiles;
        self
    }

    /// Replace the preset overrides.
    #[must_use]
    pub const fn with_presets(mut self, presets: PresetOverrides) -> Self {
        self.presets = presets;
        self
    }

    /// Enable or disable dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Replace the prompter.
    #[must_use]
    pub fn with_prompter(mut self, prompter: Arc<dyn Prompter>) -> Self {
        self.prompter = prompter;
        self
    }

    /// `path` relative to the project root, for log messages.
    #[must_use]
    pub fn relative<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }
}
