//! Routine records and the [`Log`] seam the routines write through.

/// Event target for routine headers.
pub(super) const STAGE_TARGET: &str = "spellbookx::stage";
/// Event target for actions a dry run only describes.
pub(super) const DRY_RUN_TARGET: &str = "spellbookx::dry_run";

/// How one routine ended, as shown in the end-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineRecord {
    /// Routine name (`commitlint`, `eslint`, ...).
    pub name: String,
    /// Final status.
    pub status: RoutineStatus,
    /// Skip reason, change counts, or the error chain.
    pub message: Option<String>,
}

/// Final status of a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineStatus {
    /// Dependencies installed and every file handled.
    Ok,
    /// Finished, but nothing was written because every file was left alone.
    Skipped,
    /// Only described; nothing was installed or written.
    DryRun,
    /// Stopped the run.
    Failed,
    /// Never started because an earlier routine failed.
    NotRun,
}

impl RoutineStatus {
    /// Summary marker.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Skipped => "○",
            Self::DryRun => "~",
            Self::Failed => "✗",
            Self::NotRun => "·",
        }
    }

    /// SGR prefix used on the console.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ok => "\x1b[32m",
            Self::Skipped => "\x1b[33m",
            Self::DryRun => "\x1b[37m",
            Self::Failed => "\x1b[31m",
            Self::NotRun => "\x1b[2m",
        }
    }
}

/// Sink for routine progress.
///
/// Routines only ever see this trait; [`Logger`](super::Logger) is the
/// implementation used by the binary and by most tests.
pub trait Log: Send + Sync {
    /// Header printed when a routine starts.
    fn stage(&self, msg: &str);
    /// Progress line.
    fn info(&self, msg: &str);
    /// Detail kept in the log file and shown with `--verbose`.
    fn debug(&self, msg: &str);
    /// Something the operator should look at; the run continues.
    fn warn(&self, msg: &str);
    /// The run is about to stop.
    fn error(&self, msg: &str);
    /// An action a dry run would have taken.
    fn dry_run(&self, msg: &str);
    /// Remember how a routine ended.
    fn record_routine(&self, name: &str, status: RoutineStatus, message: Option<&str>);
}
