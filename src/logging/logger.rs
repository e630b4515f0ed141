//! The production [`Log`] implementation and the end-of-run summary.
use std::path::PathBuf;
use std::sync::Mutex;

use super::types::{DRY_RUN_TARGET, Log, RoutineRecord, RoutineStatus, STAGE_TARGET};

const RESET: &str = "\x1b[0m";

/// Directory holding one log file per subcommand:
/// `$XDG_CACHE_HOME/spellbookx`, else `~/.cache/spellbookx`.
///
/// Created on first use. `None` when it cannot be created.
pub(super) fn log_dir() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CACHE_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
            .join(".cache"),
    };
    let dir = base.join("spellbookx");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Log file for `command` (`init.log`, `eslint.log`, ...).
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    log_dir().map(|dir| dir.join(format!("{command}.log")))
}

/// Emits routine progress as [`tracing`] events and remembers how each
/// routine ended.
///
/// Rendering is left to the subscriber from
/// [`init_subscriber`](super::init_subscriber); without one installed the
/// events go nowhere, which is what the tests rely on.
#[derive(Debug)]
pub struct Logger {
    records: Mutex<Vec<RoutineRecord>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Logger for one invocation of `command`.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Routines recorded so far, in order.
    #[must_use]
    pub fn routine_records(&self) -> Vec<RoutineRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Number of routines that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        Tally::of(&self.routine_records()).failed
    }

    /// Print one line per recorded routine followed by the totals.
    pub fn print_summary(&self) {
        let records = self.routine_records();
        if records.is_empty() {
            return;
        }
        self.stage("Summary");
        for line in summary_lines(&records) {
            self.info(&line);
        }
        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}{RESET}", path.display()));
        }
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    fn record_routine(&self, name: &str, status: RoutineStatus, message: Option<&str>) {
        if let Ok(mut records) = self.records.lock() {
            records.push(RoutineRecord {
                name: name.to_string(),
                status,
                message: message.map(str::to_string),
            });
        }
    }
}

/// Routine counts per status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    ok: usize,
    skipped: usize,
    dry_run: usize,
    failed: usize,
    not_run: usize,
}

impl Tally {
    fn of(records: &[RoutineRecord]) -> Self {
        records.iter().fold(Self::default(), |mut tally, record| {
            match record.status {
                RoutineStatus::Ok => tally.ok += 1,
                RoutineStatus::Skipped => tally.skipped += 1,
                RoutineStatus::DryRun => tally.dry_run += 1,
                RoutineStatus::Failed => tally.failed += 1,
                RoutineStatus::NotRun => tally.not_run += 1,
            }
            tally
        })
    }

    /// `"5 routines: 3 ok, 1 failed, 1 not run"`; zero counts are left out.
    fn headline(self) -> String {
        let parts: Vec<String> = [
            (self.ok, "ok", RoutineStatus::Ok),
            (self.skipped, "skipped", RoutineStatus::Skipped),
            (self.dry_run, "dry-run", RoutineStatus::DryRun),
            (self.failed, "failed", RoutineStatus::Failed),
            (self.not_run, "not run", RoutineStatus::NotRun),
        ]
        .into_iter()
        .filter(|(count, _, _)| *count > 0)
        .map(|(count, label, status)| format!("{}{count} {label}{RESET}", status.color()))
        .collect();
        let total = self.ok + self.skipped + self.dry_run + self.failed + self.not_run;
        let noun = if total == 1 { "routine" } else { "routines" };
        format!("{total} {noun}: {}", parts.join(", "))
    }
}

fn summary_lines(records: &[RoutineRecord]) -> Vec<String> {
    let mut lines: Vec<String> = records
        .iter()
        .map(|record| {
            let detail = record
                .message
                .as_deref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            format!(
                "{}{} {}{detail}{RESET}",
                record.status.color(),
                record.status.glyph(),
                record.name
            )
        })
        .collect();
    lines.push(Tally::of(records).headline());
    lines
}
