// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed JavaScript project plus scripted
// executor and prompter doubles so each integration test can drive the
// routines without spawning package managers or reading the terminal.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use spellbookx_cli::exec::{Executor, ProcessOutcome};
use spellbookx_cli::logging::{Log, Logger};
use spellbookx_cli::prompt::Prompter;
use spellbookx_cli::tasks::Context;

/// An isolated project backed by a [`tempfile::TempDir`].
pub struct TestProject {
    /// Temporary project directory.
    pub root: tempfile::TempDir,
}

impl TestProject {
    /// Create a project holding only a minimal `package.json`.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            root.path().join("package.json"),
            "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\"\n}\n",
        )
        .expect("write package.json");
        Self { root }
    }

    /// Path to the project root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `relative`.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, content).expect("write file");
        self
    }

    /// Read `relative` as UTF-8.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.join(relative)).expect("read file")
    }

    /// Returns `true` if `relative` exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.join(relative).symlink_metadata().is_ok()
    }

    /// Sorted names in `relative` (a directory) starting with `prefix`.
    pub fn entries_with_prefix(&self, relative: &str, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.join(relative))
            .expect("read dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(prefix))
            .collect();
        names.sort();
        names
    }
}

/// Executor that replays scripted outcomes and records every command.
///
/// Once the script runs out every command succeeds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExecutor {
    outcomes: Arc<Mutex<VecDeque<ProcessOutcome>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedExecutor {
    /// Commands return `outcomes` in order, then succeed.
    pub fn new(outcomes: impl IntoIterator<Item = ProcessOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    /// Commands run so far, as `"program arg arg"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Executor for ScriptedExecutor {
    fn run_inherited(&self, _dir: &Path, program: &str, args: &[String]) -> ProcessOutcome {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{program} {}", args.join(" ")));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ProcessOutcome::Succeeded)
    }

    fn which(&self, _program: &str) -> bool {
        true
    }
}

/// Prompter that replays scripted answers.
///
/// When a script runs out the offered default is returned.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    selects: Arc<Mutex<VecDeque<Option<usize>>>>,
    confirms: Arc<Mutex<VecDeque<Option<bool>>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    /// Queue answers for list selections.
    pub fn with_selects(self, answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.selects.lock().unwrap().extend(answers);
        self
    }

    /// Queue answers for yes/no confirmations.
    pub fn with_confirms(self, answers: impl IntoIterator<Item = Option<bool>>) -> Self {
        self.confirms.lock().unwrap().extend(answers);
        self
    }

    /// Every question asked so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, _items: &[String], default: usize) -> Option<usize> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.selects
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Some(default))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Option<bool> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.confirms
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Some(default))
    }
}

/// Build a [`Context`] for `project`, also returning the [`Logger`] so
/// tests can inspect the recorded routine results.
pub fn context(
    project: &TestProject,
    executor: &ScriptedExecutor,
    prompter: &ScriptedPrompter,
) -> (Context, Arc<Logger>) {
    let log = Arc::new(Logger::new("integration-test"));
    let ctx = Context::new(
        project.path(),
        Arc::clone(&log) as Arc<dyn Log>,
        Arc::new(executor.clone()),
        Arc::new(prompter.clone()),
    );
    (ctx, log)
}
