//! Closed preset catalogues and preset selection.
//!
//! Each configurable routine exposes a fixed list of presets published by
//! its shareable config package. Unknown names are unrepresentable: they
//! fail at CLI parsing or settings deserialization, never at write time.
use std::fmt;

use serde::Deserialize;

use crate::error::SetupError;
use crate::prompt::Prompter;

/// A closed set of named presets with a documented default.
pub trait Preset: Copy + Eq + Default + fmt::Display + 'static {
    /// Every preset, in the order offered to the operator.
    const ALL: &'static [Self];
    /// Question shown when asking the operator to choose.
    const PROMPT: &'static str;

    /// Name used in generated files and on the command line.
    fn as_str(self) -> &'static str;
}

/// Presets exported by `eslint-plugin-spellbookx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum EslintPreset {
    #[default]
    Recommended,
    RecommendedReact,
    RecommendedAstro,
    RecommendedNoSpellcheck,
    RecommendedNoSpellcheckReact,
    RecommendedNoSpellcheckAstro,
    Javascript,
    React,
    Json,
    Markdown,
    Cspell,
    Prettier,
    Ignores,
}

impl Preset for EslintPreset {
    const ALL: &'static [Self] = &[
        Self::Recommended,
        Self::RecommendedReact,
        Self::RecommendedAstro,
        Self::RecommendedNoSpellcheck,
        Self::RecommendedNoSpellcheckReact,
        Self::RecommendedNoSpellcheckAstro,
        Self::Javascript,
        Self::React,
        Self::Json,
        Self::Markdown,
        Self::Cspell,
        Self::Prettier,
        Self::Ignores,
    ];
    const PROMPT: &'static str = "Choose an ESLint preset";

    fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::RecommendedReact => "recommended-react",
            Self::RecommendedAstro => "recommended-astro",
            Self::RecommendedNoSpellcheck => "recommended-no-spellcheck",
            Self::RecommendedNoSpellcheckReact => "recommended-no-spellcheck-react",
            Self::RecommendedNoSpellcheckAstro => "recommended-no-spellcheck-astro",
            Self::Javascript => "javascript",
            Self::React => "react",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Cspell => "cspell",
            Self::Prettier => "prettier",
            Self::Ignores => "ignores",
        }
    }
}

/// Presets exported by `prettier-config-spellbookx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum PrettierPreset {
    #[default]
    Base,
    Astro,
    AstroPrisma,
    AstroTailwind,
    AstroPrismaTailwind,
}

impl Preset for PrettierPreset {
    const ALL: &'static [Self] = &[
        Self::Base,
        Self::Astro,
        Self::AstroPrisma,
        Self::AstroTailwind,
        Self::AstroPrismaTailwind,
    ];
    const PROMPT: &'static str = "Choose a Prettier preset";

    fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Astro => "astro",
            Self::AstroPrisma => "astro-prisma",
            Self::AstroTailwind => "astro-tailwind",
            Self::AstroPrismaTailwind => "astro-prisma-tailwind",
        }
    }
}

impl fmt::Display for EslintPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PrettierPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the preset for a routine.
///
/// A `configured` preset (command line or settings file) is returned as-is
/// without prompting. Otherwise the operator picks from [`Preset::ALL`]
/// with [`Default::default`] preselected.
///
/// # Errors
///
/// Returns [`SetupError::PromptCancelled`] when the operator aborts the
/// prompt or the prompter answers with an index outside the list.
pub fn select_preset<P: Preset>(
    prompter: &dyn Prompter,
    configured: Option<P>,
) -> Result<P, SetupError> {
    if let Some(preset) = configured {
        return Ok(preset);
    }

    let items: Vec<String> = P::ALL.iter().map(ToString::to_string).collect();
    let default = P::ALL
        .iter()
        .position(|p| *p == P::default())
        .unwrap_or_default();

    prompter
        .select(P::PROMPT, &items, default)
        .and_then(|index| P::ALL.get(index).copied())
        .ok_or_else(|| SetupError::cancelled(P::PROMPT))
}
