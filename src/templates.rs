//! Contents of the generated configuration files.
//!
//! Static files are embedded from `templates/`; preset-dependent files are
//! rendered here.
use crate::presets::{EslintPreset, PrettierPreset};

/// `commitlint.config.mjs`
pub const COMMITLINT_CONFIG: &str = include_str!("../templates/commitlint.config.mjs");

/// `.czrc`, pointing commitizen at the `cz-git` adapter.
pub const CZRC: &str = "{\n  \"path\": \"cz-git\"\n}";

/// `cspell.config.cjs`
pub const CSPELL_CONFIG: &str = include_str!("../templates/cspell.config.cjs");

/// `.cspell/custom-words.txt` starts out empty.
pub const CSPELL_CUSTOM_WORDS: &str = "";

/// `.editorconfig`
pub const EDITORCONFIG: &str = include_str!("../templates/editorconfig");

/// `.prettierignore`
pub const PRETTIERIGNORE: &str = include_str!("../templates/prettierignore");

/// `.vscode/extensions.json`
pub const VSCODE_EXTENSIONS: &str = include_str!("../templates/vscode/extensions.json");

/// `.vscode/settings.json`
pub const VSCODE_SETTINGS: &str = include_str!("../templates/vscode/settings.json");

/// `eslint.config.mjs` for `preset`.
#[must_use]
pub fn eslint_config(preset: EslintPreset) -> String {
    format!(
        "import spellbookx from 'eslint-plugin-spellbookx';\n\
         \n\
         export default [...spellbookx.configs['{preset}']];\n"
    )
}

/// `prettier.config.mjs` for `preset`.
#[must_use]
pub fn prettier_config(preset: PrettierPreset) -> String {
    format!(
        "import spellbookx from 'prettier-config-spellbookx';\n\
         \n\
         /** @type {{import('prettier').Config}} */\n\
         export default {{\n  ...spellbookx['{preset}'],\n}};\n"
    )
}
