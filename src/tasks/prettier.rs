//! Code formatting with a shared preset.
use std::path::Path;

use anyhow::Result;

use crate::presets::PrettierPreset;
use crate::resources::file::{CollisionPolicy, GeneratedFile};
use crate::resources::package::Dependencies;
use crate::templates;

use super::materialize::materialize_files;
use super::{Context, Routine, TaskResult, choose_preset};

const DEPENDENCIES: Dependencies = Dependencies {
    global: &["prettier"],
    dev: &["prettier-config-spellbookx", "prettier"],
};

/// Sets up Prettier and the shared `.editorconfig`.
///
/// `prettier.config.mjs` is only replaced after the operator agrees.
#[derive(Debug, Clone, Copy)]
pub struct Prettier;

impl Prettier {
    /// Files written under `root` for `preset`.
    #[must_use]
    pub fn files(root: &Path, preset: PrettierPreset) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new(
                root,
                "prettier.config.mjs",
                templates::prettier_config(preset),
                CollisionPolicy::ConfirmOverwrite,
            ),
            GeneratedFile::new(
                root,
                ".editorconfig",
                templates::EDITORCONFIG,
                CollisionPolicy::OverwriteWithBackup,
            ),
            GeneratedFile::new(
                root,
                ".prettierignore",
                templates::PRETTIERIGNORE,
                CollisionPolicy::OverwriteWithBackup,
            ),
        ]
    }
}

impl Routine for Prettier {
    fn name(&self) -> &'static str {
        "prettier"
    }

    fn dependencies(&self) -> Option<Dependencies> {
        Some(DEPENDENCIES)
    }

    fn configure(&self, ctx: &Context) -> Result<TaskResult> {
        let preset = choose_preset(ctx, ctx.presets.prettier)?;
        Ok(materialize_files(ctx, &Self::files(&ctx.root, preset))?.finish(ctx))
    }
}
