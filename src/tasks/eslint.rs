//! Linting with the flat config format.
use std::path::Path;

use anyhow::Result;

use crate::presets::EslintPreset;
use crate::resources::file::{CollisionPolicy, GeneratedFile};
use crate::resources::package::Dependencies;
use crate::templates;

use super::materialize::{back_up_legacy_files, materialize_files};
use super::{Context, Routine, TaskResult, choose_preset};

const DEPENDENCIES: Dependencies = Dependencies {
    global: &["eslint"],
    dev: &["eslint-plugin-spellbookx", "eslint"],
};

/// Pre-flat-config files that would shadow `eslint.config.mjs`.
pub const LEGACY_CONFIGS: &[&str] = &[
    ".eslintrc",
    ".eslintrc.json",
    ".eslintrc.yml",
    ".eslintrc.yaml",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.mjs",
];

/// Sets up ESLint, moving legacy `.eslintrc*` files aside first.
#[derive(Debug, Clone, Copy)]
pub struct Eslint;

impl Eslint {
    /// Files written under `root` for `preset`.
    #[must_use]
    pub fn files(root: &Path, preset: EslintPreset) -> Vec<GeneratedFile> {
        vec![GeneratedFile::new(
            root,
            "eslint.config.mjs",
            templates::eslint_config(preset),
            CollisionPolicy::OverwriteWithBackup,
        )]
    }
}

impl Routine for Eslint {
    fn name(&self) -> &'static str {
        "eslint"
    }

    fn dependencies(&self) -> Option<Dependencies> {
        Some(DEPENDENCIES)
    }

    fn configure(&self, ctx: &Context) -> Result<TaskResult> {
        let preset = choose_preset(ctx, ctx.presets.eslint)?;
        let mut stats = back_up_legacy_files(ctx, LEGACY_CONFIGS);
        stats += materialize_files(ctx, &Self::files(&ctx.root, preset))?;
        Ok(stats.finish(ctx))
    }
}
