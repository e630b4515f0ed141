//! Spell checking with a project word list.
use std::path::Path;

use anyhow::Result;

use crate::resources::file::{CollisionPolicy, GeneratedFile};
use crate::resources::package::Dependencies;
use crate::templates;

use super::materialize::materialize_files;
use super::{Context, Routine, TaskResult};

const DEPENDENCIES: Dependencies = Dependencies {
    global: &["cspell"],
    dev: &["cspell", "@cspell/cspell-types", "cspell-config-spellbookx"],
};

/// Sets up cspell. Existing word lists and configs are never touched.
#[derive(Debug, Clone, Copy)]
pub struct Cspell;

impl Cspell {
    /// Files written under `root`.
    #[must_use]
    pub fn files(root: &Path) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new(
                root,
                ".cspell/custom-words.txt",
                templates::CSPELL_CUSTOM_WORDS,
                CollisionPolicy::SkipIfExists,
            ),
            GeneratedFile::new(
                root,
                "cspell.config.cjs",
                templates::CSPELL_CONFIG,
                CollisionPolicy::SkipIfExists,
            ),
        ]
    }
}

impl Routine for Cspell {
    fn name(&self) -> &'static str {
        "cspell"
    }

    fn dependencies(&self) -> Option<Dependencies> {
        Some(DEPENDENCIES)
    }

    fn configure(&self, ctx: &Context) -> Result<TaskResult> {
        Ok(materialize_files(ctx, &Self::files(&ctx.root))?.finish(ctx))
    }
}
