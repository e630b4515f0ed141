//! Bootstrap routines and the sequential orchestrator.
//!
//! Each [`Routine`] installs its tooling through the detected package
//! manager and then writes its configuration files. [`run_all`] runs
//! routines strictly in order and stops at the first failure.
pub mod commitlint;
mod context;
pub mod cspell;
pub mod eslint;
pub mod install;
pub mod materialize;
pub mod prettier;
mod processing;
pub mod vscode;

pub use context::{Context, PresetOverrides};
pub use processing::{TaskResult, TaskStats};

use anyhow::Result;

use crate::error::SetupError;
use crate::logging::RoutineStatus;
use crate::presets::{Preset, select_preset};
use crate::resources::package::Dependencies;

/// One configuration domain of the bootstrap.
pub trait Routine: Send + Sync {
    /// Short lowercase name, used for stage headers and `--skip`/`--only`.
    fn name(&self) -> &'static str;

    /// Packages installed before any file is written.
    ///
    /// The default implementation installs nothing.
    fn dependencies(&self) -> Option<Dependencies> {
        None
    }

    /// Choose presets and write the routine's files.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be backed up or written, or the
    /// operator cancels a prompt.
    fn configure(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Every routine, in full bootstrap order.
#[must_use]
pub fn all_routines() -> Vec<Box<dyn Routine>> {
    vec![
        Box::new(commitlint::Commitlint),
        Box::new(cspell::Cspell),
        Box::new(prettier::Prettier),
        Box::new(eslint::Eslint),
        Box::new(vscode::Vscode),
    ]
}

/// Install a routine's dependencies, then configure it.
///
/// # Errors
///
/// Returns the first install, prompt or filesystem error. Files are never
/// written after a failed install.
pub fn run_routine(routine: &dyn Routine, ctx: &Context) -> Result<TaskResult> {
    ctx.log.stage(routine.name());
    if let Some(deps) = routine.dependencies() {
        install::install_dependencies(ctx, &deps)?;
    }
    routine.configure(ctx)
}

/// Run `routines` in order, recording each outcome for the summary.
///
/// The first failure is recorded, every remaining routine is recorded as
/// not run, and the error is returned. Nothing is rolled back.
///
/// # Errors
///
/// Returns the failing routine's error, labelled with its name.
pub fn run_all(routines: &[Box<dyn Routine>], ctx: &Context) -> Result<()> {
    for (index, routine) in routines.iter().enumerate() {
        let name = routine.name();
        match run_routine(routine.as_ref(), ctx) {
            Ok(TaskResult::Ok) => ctx.log.record_routine(name, RoutineStatus::Ok, None),
            Ok(TaskResult::Skipped(reason)) => {
                ctx.log.record_routine(name, RoutineStatus::Skipped, Some(&reason));
            }
            Ok(TaskResult::DryRun) => ctx.log.record_routine(name, RoutineStatus::DryRun, None),
            Err(e) => {
                ctx.log
                    .record_routine(name, RoutineStatus::Failed, Some(&format!("{e:#}")));
                for rest in routines.iter().skip(index + 1) {
                    ctx.log.record_routine(rest.name(), RoutineStatus::NotRun, None);
                }
                return Err(e.context(format!("{name} setup failed")));
            }
        }
    }
    Ok(())
}

/// Resolve a routine's preset.
///
/// A dry run never prompts; without a configured preset it reports the
/// default instead.
///
/// # Errors
///
/// Returns [`SetupError::PromptCancelled`] if the operator aborts.
pub fn choose_preset<P: Preset>(ctx: &Context, configured: Option<P>) -> Result<P, SetupError> {
    if ctx.dry_run && configured.is_none() {
        let preset = P::default();
        ctx.log
            .dry_run(&format!("would ask: {} (default: {preset})", P::PROMPT));
        return Ok(preset);
    }
    let preset = select_preset(ctx.prompter.as_ref(), configured)?;
    ctx.log.info(&format!("preset: {preset}"));
    Ok(preset)
}

/// Shared helpers for routine unit tests.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    use crate::exec::{Executor, ProcessOutcome};
    use crate::logging::{Log, Logger};
    use crate::prompt::DefaultsPrompter;

    use super::Context;

    /// Executor that replays scripted outcomes and records every command.
    ///
    /// Once the script runs out every command succeeds. Clones share state,
    /// so a test can keep a handle after moving one into the context.
    #[derive(Debug, Clone, Default)]
    pub struct FakeExecutor {
        outcomes: Arc<Mutex<VecDeque<ProcessOutcome>>>,
        calls: Arc<Mutex<Vec<String>>>,
        on_path: bool,
    }

    impl FakeExecutor {
        /// Every command succeeds and every program is on PATH.
        #[must_use]
        pub fn succeeding() -> Self {
            Self {
                on_path: true,
                ..Self::default()
            }
        }

        /// Commands return `outcomes` in order, then succeed.
        #[must_use]
        pub fn scripted(outcomes: impl IntoIterator<Item = ProcessOutcome>) -> Self {
            Self {
                outcomes: Arc::new(Mutex::new(outcomes.into_iter().collect())),
                ..Self::succeeding()
            }
        }

        /// Commands run so far, as `"program arg arg"`.
        #[must_use]
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Executor for FakeExecutor {
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
            self.on_path
        }
    }

    /// Build a [`Context`] rooted at `root` that answers prompts with
    /// defaults, also returning the [`Logger`] so tests can inspect
    /// recorded routine state.
    #[must_use]
    pub fn make_context(
        root: &Path,
        executor: impl Executor + 'static,
    ) -> (Context, Arc<Logger>) {
        let log = Arc::new(Logger::new("test"));
        let ctx = Context::new(
            root,
            Arc::clone(&log) as Arc<dyn Log>,
            Arc::new(executor),
            Arc::new(DefaultsPrompter),
        );
        (ctx, log)
    }
}
