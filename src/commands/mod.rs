//! Top-level subcommand orchestration.
pub mod completions;
pub mod init;
pub mod routine;
pub mod version;

use std::io::IsTerminal as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::Settings;
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger};
use crate::prompt::{DefaultsPrompter, Prompter, TerminalPrompter};
use crate::tasks::{self, Context, PresetOverrides, Routine};

/// Environment variable naming the project root.
pub const ROOT_ENV: &str = "SPELLBOOKX_ROOT";

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Canonical project root.
    pub root: PathBuf,
    /// Project settings (`spellbookx.toml`).
    pub settings: Settings,
}

impl CommandSetup {
    /// Resolve the project root and load its settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the root does not exist or the settings file is
    /// malformed.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let version = option_env!("SPELLBOOKX_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
        log.info(&format!("spellbookx {version}"));

        let root = resolve_root(global)?;
        log.info(&format!("project: {}", root.display()));

        let settings = Settings::load(&root)?;
        log.debug(&format!(
            "{} extra lock-file marker(s) configured",
            settings.lockfiles.len()
        ));
        Ok(Self { root, settings })
    }

    /// Build the routine context, with `cli` presets taking precedence
    /// over the settings file.
    #[must_use]
    pub fn context(&self, global: &GlobalOpts, cli: PresetOverrides, log: &Arc<Logger>) -> Context {
        Context::new(
            &self.root,
            Arc::clone(log) as Arc<dyn Log>,
            Arc::new(SystemExecutor),
            prompter(global, log),
        )
        .with_lockfiles(self.settings.lockfile_table())
        .with_presets(cli.or_settings(&self.settings))
        .with_dry_run(global.dry_run)
    }
}

fn prompter(global: &GlobalOpts, log: &Logger) -> Arc<dyn Prompter> {
    if global.defaults {
        return Arc::new(DefaultsPrompter);
    }
    if !std::io::stdin().is_terminal() {
        log.warn("stdin is not a terminal, answering prompts with defaults");
        return Arc::new(DefaultsPrompter);
    }
    Arc::new(TerminalPrompter)
}

/// Resolve the project root: `--root`, then `$SPELLBOOKX_ROOT`, then the
/// current directory.
///
/// # Errors
///
/// Returns an error if the directory does not exist.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    let root = match (&global.root, std::env::var_os(ROOT_ENV)) {
        (Some(root), _) => root.clone(),
        (None, Some(env)) => PathBuf::from(env),
        (None, None) => std::env::current_dir().context("cannot read current directory")?,
    };
    let root = dunce::canonicalize(&root)
        .with_context(|| format!("project root {} not found", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("project root {} is not a directory", root.display());
    }
    Ok(root)
}

/// Run `routines`, print the summary, and return the first failure.
///
/// # Errors
///
/// Returns the failing routine's error.
pub fn run_routines_to_completion(
    routines: &[Box<dyn Routine>],
    ctx: &Context,
    log: &Logger,
) -> Result<()> {
    let result = tasks::run_all(routines, ctx);
    log.print_summary();
    result
}
