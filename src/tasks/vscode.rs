//! Editor recommendations and workspace settings.
use std::path::Path;

use anyhow::Result;

use crate::resources::file::{CollisionPolicy, GeneratedFile};
use crate::templates;

use super::materialize::materialize_files;
use super::{Context, Routine, TaskResult};

/// Writes `.vscode/` workspace files. Installs nothing.
#[derive(Debug, Clone, Copy)]
pub struct Vscode;

impl Vscode {
    /// Files written under `root`.
    #[must_use]
    pub fn files(root: &Path) -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new(
                root,
                ".vscode/extensions.json",
                templates::VSCODE_EXTENSIONS,
                CollisionPolicy::OverwriteWithBackup,
            ),
            GeneratedFile::new(
                root,
                ".vscode/settings.json",
                templates::VSCODE_SETTINGS,
                CollisionPolicy::OverwriteWithBackup,
            ),
        ]
    }
}

impl Routine for Vscode {
    fn name(&self) -> &'static str {
        "vscode"
    }

    fn configure(&self, ctx: &Context) -> Result<TaskResult> {
        Ok(materialize_files(ctx, &Self::files(&ctx.root))?.finish(ctx))
    }
}
