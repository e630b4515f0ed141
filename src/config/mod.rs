//! Project settings (`spellbookx.toml`) and lock-file detection tables.
pub mod lockfiles;
pub mod toml_loader;

use std::path::Path;

use serde::Deserialize;

use crate::error::SetupError;
use crate::presets::{EslintPreset, PrettierPreset};
use lockfiles::{LockFileMarker, LockFileTable};

/// File name of the optional per-project settings file.
pub const SETTINGS_FILE: &str = "spellbookx.toml";

/// `[eslint]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EslintSettings {
    /// Preset to use instead of prompting.
    pub preset: Option<EslintPreset>,
}

/// `[prettier]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrettierSettings {
    /// Preset to use instead of prompting.
    pub preset: Option<PrettierPreset>,
}

/// Optional per-project settings.
///
/// Every section is optional; a project without `spellbookx.toml` gets the
/// defaults and interactive preset prompts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// ESLint routine settings.
    #[serde(default)]
    pub eslint: EslintSettings,
    /// Prettier routine settings.
    #[serde(default)]
    pub prettier: PrettierSettings,
    /// Extra lock-file markers, checked after the built-in ones.
    #[serde(default)]
    pub lockfiles: Vec<LockFileMarker>,
}

impl Settings {
    /// Load `spellbookx.toml` from the project root.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidConfig`] if the file exists but is
    /// malformed or names an unknown preset.
    pub fn load(root: &Path) -> Result<Self, SetupError> {
        toml_loader::load_config(&root.join(SETTINGS_FILE))
    }

    /// Built-in lock-file table extended with the configured markers.
    #[must_use]
    pub fn lockfile_table(&self) -> LockFileTable {
        LockFileTable::default().with_extra(self.lockfiles.iter().cloned())
    }
}
