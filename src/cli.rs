//! Command-line interface definition.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::presets::{EslintPreset, PrettierPreset};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "spellbookx",
    about = "Bootstrap lint, format, spell-check and editor tooling into a JavaScript project",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Preview changes without installing or writing anything
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Project root (default: $SPELLBOOKX_ROOT, else the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Never prompt; use configured or default presets and keep existing files
    #[arg(long, global = true)]
    pub defaults: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up every tool in order: commitlint, cspell, prettier, eslint, vscode
    Init(InitOpts),
    /// Set up commitlint and commitizen
    Commitlint,
    /// Set up cspell
    Cspell,
    /// Set up Prettier and .editorconfig
    Prettier(PrettierOpts),
    /// Set up ESLint
    Eslint(EslintOpts),
    /// Write VS Code workspace settings
    Vscode,
    /// Print shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Subcommand name, used for the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Commitlint => "commitlint",
            Self::Cspell => "cspell",
            Self::Prettier(_) => "prettier",
            Self::Eslint(_) => "eslint",
            Self::Vscode => "vscode",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

/// Options for the `init` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InitOpts {
    /// Skip specific routines
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific routines
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// ESLint preset (skips the prompt)
    #[arg(long, value_enum)]
    pub eslint_preset: Option<EslintPreset>,

    /// Prettier preset (skips the prompt)
    #[arg(long, value_enum)]
    pub prettier_preset: Option<PrettierPreset>,
}

/// Options for the `prettier` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct PrettierOpts {
    /// Preset to use (skips the prompt)
    #[arg(long, value_enum)]
    pub preset: Option<PrettierPreset>,
}

/// Options for the `eslint` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct EslintOpts {
    /// Preset to use (skips the prompt)
    #[arg(long, value_enum)]
    pub preset: Option<EslintPreset>,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_dry_run() {
        let cli = Cli::parse_from(["spellbookx", "--dry-run", "init"]);
        assert!(cli.global.dry_run);
        assert!(matches!(cli.command, Command::Init(_)));
    }

    #[test]
    fn parse_init_dry_run_short() {
        let cli = Cli::parse_from(["spellbookx", "-d", "init"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_init_skip_routines() {
        let cli = Cli::parse_from(["spellbookx", "init", "--skip", "cspell,vscode"]);
        assert!(
            matches!(&cli.command, Command::Init(_)),
            "Expected Init command"
        );
        if let Command::Init(opts) = cli.command {
            assert_eq!(opts.skip, vec!["cspell", "vscode"]);
        }
    }

    #[test]
    fn parse_init_only_routines() {
        let cli = Cli::parse_from(["spellbookx", "init", "--only", "eslint"]);
        assert!(matches!(&cli.command, Command::Init(_)));
        if let Command::Init(opts) = cli.command {
            assert_eq!(opts.only, vec!["eslint"]);
        }
    }

    #[test]
    fn parse_init_presets() {
        let cli = Cli::parse_from([
            "spellbookx",
            "init",
            "--eslint-preset",
            "recommended-react",
            "--prettier-preset",
            "astro-prisma",
        ]);
        assert!(matches!(&cli.command, Command::Init(_)));
        if let Command::Init(opts) = cli.command {
            assert_eq!(opts.eslint_preset, Some(EslintPreset::RecommendedReact));
            assert_eq!(opts.prettier_preset, Some(PrettierPreset::AstroPrisma));
        }
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let result = Cli::try_parse_from(["spellbookx", "eslint", "--preset", "typescript"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_eslint_preset() {
        let cli = Cli::parse_from(["spellbookx", "eslint", "--preset", "json"]);
        assert!(matches!(&cli.command, Command::Eslint(_)));
        if let Command::Eslint(opts) = cli.command {
            assert_eq!(opts.preset, Some(EslintPreset::Json));
        }
    }

    #[test]
    fn parse_single_routines() {
        for (arg, name) in [
            ("commitlint", "commitlint"),
            ("cspell", "cspell"),
            ("prettier", "prettier"),
            ("vscode", "vscode"),
        ] {
            let cli = Cli::parse_from(["spellbookx", arg]);
            assert_eq!(cli.command.name(), name);
        }
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["spellbookx", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["spellbookx", "completions", "bash"]);
        assert!(matches!(cli.command, Command::Completions(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["spellbookx", "-v", "init"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_root_and_defaults() {
        let cli = Cli::parse_from(["spellbookx", "--root", "/tmp/app", "--defaults", "vscode"]);
        assert_eq!(cli.global.root, Some(PathBuf::from("/tmp/app")));
        assert!(cli.global.defaults);
    }
}
