//! Command: full bootstrap.
use std::sync::Arc;

use anyhow::Result;

use crate::cli::{GlobalOpts, InitOpts};
use crate::logging::{Log, Logger};
use crate::tasks::{self, PresetOverrides, Routine};

use super::{CommandSetup, run_routines_to_completion};

/// Run every routine in bootstrap order, honoring `--skip` and `--only`.
///
/// # Errors
///
/// Returns an error if setup fails or a routine fails.
pub fn run(global: &GlobalOpts, opts: &InitOpts, log: &Arc<Logger>) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let presets = PresetOverrides {
        eslint: opts.eslint_preset,
        prettier: opts.prettier_preset,
    };
    let ctx = setup.context(global, presets, log);

    let routines = select(tasks::all_routines(), opts);
    if routines.is_empty() {
        log.warn("no routines selected");
        return Ok(());
    }
    run_routines_to_completion(&routines, &ctx, log)
}

/// Filter routines by `--only` (takes precedence) or `--skip`.
///
/// Names match case-insensitively by substring.
#[must_use]
pub fn select(routines: Vec<Box<dyn Routine>>, opts: &InitOpts) -> Vec<Box<dyn Routine>> {
    routines
        .into_iter()
        .filter(|r| {
            let name = r.name().to_lowercase();
            if !opts.only.is_empty() {
                return opts.only.iter().any(|o| name.contains(&o.to_lowercase()));
            }
            if !opts.skip.is_empty() {
                return !opts.skip.iter().any(|s| name.contains(&s.to_lowercase()));
            }
            true
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn opts(skip: &[&str], only: &[&str]) -> InitOpts {
        InitOpts {
            skip: skip.iter().map(ToString::to_string).collect(),
            only: only.iter().map(ToString::to_string).collect(),
            eslint_preset: None,
            prettier_preset: None,
        }
    }

    fn names(routines: &[Box<dyn Routine>]) -> Vec<&'static str> {
        routines.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn no_filter_keeps_order() {
        let selected = select(tasks::all_routines(), &opts(&[], &[]));
        assert_eq!(
            names(&selected),
            ["commitlint", "cspell", "prettier", "eslint", "vscode"]
        );
    }

    #[test]
    fn skip_removes_routines() {
        let selected = select(tasks::all_routines(), &opts(&["CSpell", "vscode"], &[]));
        assert_eq!(names(&selected), ["commitlint", "prettier", "eslint"]);
    }

    #[test]
    fn only_wins_over_skip() {
        let selected = select(tasks::all_routines(), &opts(&["eslint"], &["eslint"]));
        assert_eq!(names(&selected), ["eslint"]);
    }
}
