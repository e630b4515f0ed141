use super::context::Context;

/// Result of a single routine.
///
/// # Examples
///
/// ```
/// use spellbookx_cli::tasks::TaskResult;
///
/// let ok = TaskResult::Ok;
/// let skipped = TaskResult::Skipped("1 skipped".into());
/// let dry = TaskResult::DryRun;
///
/// assert!(matches!(ok, TaskResult::Ok));
/// assert!(matches!(skipped, TaskResult::Skipped(_)));
/// assert!(matches!(dry, TaskResult::DryRun));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Routine completed and wrote (or confirmed) its files.
    Ok,
    /// Routine completed without changing anything it was allowed to change.
    Skipped(String),
    /// Routine ran in dry-run mode.
    DryRun,
}

/// Counters for the files a routine handles.
///
/// # Examples
///
/// ```
/// use spellbookx_cli::tasks::TaskStats;
///
/// let mut stats = TaskStats::new();
/// stats.changed = 3;
/// stats.already_ok = 1;
///
/// assert_eq!(stats.summary(false), "3 changed, 1 already ok");
/// assert_eq!(stats.summary(true), "3 would change, 1 already ok");
/// ```
///
/// When files are skipped, the summary includes the count:
///
/// ```
/// use spellbookx_cli::tasks::TaskStats;
///
/// let stats = TaskStats { changed: 1, already_ok: 0, skipped: 2 };
/// assert_eq!(stats.summary(false), "1 changed, 0 already ok, 2 skipped");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of files written or moved.
    pub changed: u32,
    /// Number of files already in the desired state.
    pub already_ok: u32,
    /// Number of files left alone (kept, already present, or not writable).
    pub skipped: u32,
}

impl TaskStats {
    /// Create a new empty stats counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the summary string (e.g. "3 changed, 1 already ok, 1 skipped").
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would change" } else { "changed" };
        if self.skipped > 0 {
            format!(
                "{} {verb}, {} already ok, {} skipped",
                self.changed, self.already_ok, self.skipped
            )
        } else {
            format!("{} {verb}, {} already ok", self.changed, self.already_ok)
        }
    }

    /// Log the summary and return the appropriate `TaskResult`.
    ///
    /// A real run that changed nothing but skipped something reports
    /// [`TaskResult::Skipped`].
    #[must_use]
    pub fn finish(self, ctx: &Context) -> TaskResult {
        let summary = self.summary(ctx.dry_run);
        ctx.log.info(&summary);
        if ctx.dry_run {
            TaskResult::DryRun
        } else if self.changed == 0 && self.skipped > 0 {
            TaskResult::Skipped(summary)
        } else {
            TaskResult::Ok
        }
    }
}

impl std::ops::AddAssign for TaskStats {
    fn add_assign(&mut self, other: Self) {
        self.changed += other.changed;
        self.already_ok += other.already_ok;
        self.skipped += other.skipped;
    }
}
