//! Dependency installation through the detected package manager.
use crate::error::{InstallStep, SetupError};
use crate::resources::package::{Dependencies, plan_install, resolve_package_manager};

use super::Context;

/// Detect the package manager and run the global, then the dev install.
///
/// A project without a lock file falls back to npm with a warning. An
/// empty package list skips its step. In dry-run mode the commands are
/// only reported.
///
/// # Errors
///
/// Returns [`SetupError::LaunchFailed`] or [`SetupError::ToolFailed`] for
/// the first step that does not succeed; the dev step never runs after a
/// failed global step.
pub fn install_dependencies(ctx: &Context, deps: &Dependencies) -> Result<(), SetupError> {
    let resolution = resolve_package_manager(&ctx.root, &ctx.lockfiles);
    match &resolution.marker {
        Some(marker) => ctx
            .log
            .info(&format!("using {} (found {marker})", resolution.kind)),
        None => ctx
            .log
            .warn("no package manager lock file found, falling back to npm"),
    }

    let plan = plan_install(resolution.kind, deps.global, deps.dev);
    if !ctx.dry_run && !ctx.executor.which(&plan.program) {
        ctx.log
            .warn(&format!("{} not found on PATH", plan.program));
    }

    for (step, args) in [
        (InstallStep::Global, &plan.global),
        (InstallStep::Dev, &plan.dev),
    ] {
        if args.is_empty() {
            ctx.log.debug(&format!("{step}: nothing to install"));
            continue;
        }
        let command = format!("{} {}", plan.program, args.join(" "));
        if ctx.dry_run {
            ctx.log.dry_run(&format!("would run: {command}"));
            continue;
        }
        ctx.log.info(&format!("running: {command}"));
        ctx.executor
            .run_inherited(&ctx.root, &plan.program, args)
            .into_result(&plan.program, step)?;
    }
    Ok(())
}
