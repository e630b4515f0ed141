//! Write generated files into the project and report what changed.
use std::path::Path;

use crate::error::SetupError;
use crate::resources::backup::{self, BackupChain, backup_path};
use crate::resources::file::{CollisionPolicy, GeneratedFile, Materialized};
use crate::resources::package_json::CommitizenPath;
use crate::resources::{Resource, ResourceChange, ResourceState};

use super::{Context, TaskStats};

/// Materialize `files` in order, stopping at the first error.
///
/// In dry-run mode every file is inspected and the planned action logged;
/// nothing is written, renamed, or asked.
///
/// # Errors
///
/// Propagates the first backup, write or prompt error. Files earlier in
/// the list stay written.
pub fn materialize_files(ctx: &Context, files: &[GeneratedFile]) -> Result<TaskStats, SetupError> {
    let mut stats = TaskStats::new();
    for file in files {
        if ctx.dry_run {
            preview(ctx, file, &mut stats)?;
        } else {
            let result = file.apply(ctx.prompter.as_ref())?;
            report(ctx, file, &result, &mut stats);
        }
    }
    Ok(stats)
}

fn report(ctx: &Context, file: &GeneratedFile, result: &Materialized, stats: &mut TaskStats) {
    let rel = ctx.relative(&file.path);
    match &result.change {
        ResourceChange::Applied => {
            if let Some(report) = &result.backup {
                if let Some(rotated) = &report.rotated {
                    ctx.log.info(&format!(
                        "rotated previous backup to {}",
                        ctx.relative(rotated)
                    ));
                }
                ctx.log
                    .info(&format!("backed up {rel} to {}", ctx.relative(&report.backup)));
            }
            ctx.log.info(&format!("wrote {rel}"));
            stats.changed += 1;
        }
        ResourceChange::AlreadyCorrect => {
            ctx.log.debug(&format!("ok: {rel}"));
            stats.already_ok += 1;
        }
        ResourceChange::Skipped { reason } => {
            ctx.log.info(&format!("skipped {rel}: {reason}"));
            stats.skipped += 1;
        }
    }
}

fn preview(ctx: &Context, file: &GeneratedFile, stats: &mut TaskStats) -> Result<(), SetupError> {
    let rel = ctx.relative(&file.path);
    let state = file.current_state()?;

    if file.policy == CollisionPolicy::SkipIfExists && state != ResourceState::Missing {
        ctx.log
            .dry_run(&format!("would skip {rel} (already present)"));
        stats.skipped += 1;
        return Ok(());
    }

    match state {
        ResourceState::Missing => {
            ctx.log.dry_run(&format!("would create {rel}"));
            stats.changed += 1;
        }
        ResourceState::Correct => {
            ctx.log.debug(&format!("ok: {rel}"));
            stats.already_ok += 1;
        }
        ResourceState::Invalid { reason } => {
            ctx.log.dry_run(&format!("would skip {rel} ({reason})"));
            stats.skipped += 1;
        }
        ResourceState::Incorrect { current } => {
            match file.policy {
                CollisionPolicy::ConfirmOverwrite => ctx.log.dry_run(&format!(
                    "would ask before overwriting {rel} (currently {current})"
                )),
                CollisionPolicy::OverwriteWithBackup | CollisionPolicy::SkipIfExists => {
                    let chain = BackupChain::scan(&file.path);
                    if !chain.is_empty() {
                        ctx.log.dry_run(&format!(
                            "would rotate the existing backup of {rel} ({} kept)",
                            chain.len()
                        ));
                    }
                    ctx.log.dry_run(&format!(
                        "would back up {rel} to {} and overwrite it (currently {current})",
                        ctx.relative(&backup_path(&file.path))
                    ));
                }
            }
            stats.changed += 1;
        }
    }
    Ok(())
}

/// Move superseded config files out of the way.
///
/// Files that do not exist are ignored. A failed rename is logged as a
/// warning and counted as skipped; it never stops the routine.
#[must_use]
pub fn back_up_legacy_files(ctx: &Context, names: &[&str]) -> TaskStats {
    let mut stats = TaskStats::new();
    for name in names {
        let path = ctx.root.join(name);
        if path.symlink_metadata().is_err() {
            continue;
        }
        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("would back up superseded {name}"));
            stats.changed += 1;
            continue;
        }
        match backup::back_up_legacy(&path) {
            Ok(Some(target)) => {
                ctx.log.info(&format!(
                    "backed up superseded {name} to {}",
                    ctx.relative(&target)
                ));
                stats.changed += 1;
            }
            Ok(None) => {}
            Err(e) => {
                ctx.log.warn(&describe(&e, &path));
                stats.skipped += 1;
            }
        }
    }
    stats
}

fn describe(e: &SetupError, path: &Path) -> String {
    use std::error::Error as _;
    e.source().map_or_else(
        || format!("{e}; leaving {} in place", path.display()),
        |source| format!("{e}: {source}; leaving {} in place", path.display()),
    )
}

/// Point commitizen at its adapter in `package.json`.
///
/// # Errors
///
/// Returns [`SetupError::FilesystemWriteFailed`] if `package.json` is
/// missing, malformed, or cannot be written. In dry-run mode those cases
/// are reported as warnings instead.
pub fn update_package_json(ctx: &Context, entry: &CommitizenPath) -> Result<TaskStats, SetupError> {
    let mut stats = TaskStats::new();
    let rel = ctx.relative(entry.path());

    if ctx.dry_run {
        match entry.current_state()? {
            ResourceState::Correct => stats.already_ok += 1,
            ResourceState::Incorrect { current } => {
                ctx.log.dry_run(&format!(
                    "would set config.commitizen.path in {rel} (currently {current})"
                ));
                stats.changed += 1;
            }
            ResourceState::Missing => {
                ctx.log.warn(&format!("{rel} not found; a real run would fail"));
                stats.skipped += 1;
            }
            ResourceState::Invalid { reason } => {
                ctx.log.warn(&format!("{reason}; a real run would fail"));
                stats.skipped += 1;
            }
        }
        return Ok(stats);
    }

    match entry.apply()? {
        ResourceChange::Applied => {
            ctx.log
                .info(&format!("set config.commitizen.path in {rel}"));
            stats.changed += 1;
        }
        ResourceChange::AlreadyCorrect => {
            ctx.log.debug(&format!("ok: {}", entry.description()));
            stats.already_ok += 1;
        }
        ResourceChange::Skipped { reason } => {
            ctx.log.info(&format!("skipped {rel}: {reason}"));
            stats.skipped += 1;
        }
    }
    Ok(stats)
}
