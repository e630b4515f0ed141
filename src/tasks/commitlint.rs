//! Conventional-commit linting and the commitizen prompt.
use std::path::Path;

use anyhow::Result;

use crate::resources::file::{CollisionPolicy, GeneratedFile};
use crate::resources::package::Dependencies;
use crate::resources::package_json::{COMMITIZEN_ADAPTER, CommitizenPath};
use crate::templates;

use super::materialize::{materialize_files, update_package_json};
use super::{Context, Routine, TaskResult};

const DEPENDENCIES: Dependencies = Dependencies {
    global: &["commitizen", "cz-git"],
    dev: &[
        "commitlint-config-spellbookx",
        "@commitlint/cli",
        "commitizen",
        "cz-git",
    ],
};

/// Sets up commitlint and commitizen.
#[derive(Debug, Clone, Copy)]
pub struct Commitlint;

impl Commitlint {
    /// Files written under `root`.
    #[must_use]
    pub fn files(root: &Path) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new(
                root,
                "commitlint.config.mjs",
                templates::COMMITLINT_CONFIG,
                CollisionPolicy::OverwriteWithBackup,
            ),
            GeneratedFile::new(
                root,
                ".czrc",
                templates::CZRC,
                CollisionPolicy::OverwriteWithBackup,
            ),
        ]
    }
}

impl Routine for Commitlint {
    fn name(&self) -> &'static str {
        "commitlint"
    }

    fn dependencies(&self) -> Option<Dependencies> {
        Some(DEPENDENCIES)
    }

    fn configure(&self, ctx: &Context) -> Result<TaskResult> {
        let mut stats = materialize_files(ctx, &Self::files(&ctx.root))?;
        stats += update_package_json(ctx, &CommitizenPath::new(&ctx.root, COMMITIZEN_ADAPTER))?;
        Ok(stats.finish(ctx))
    }
}
