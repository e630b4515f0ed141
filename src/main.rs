use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use spellbookx_cli::cli::{self, Command};
use spellbookx_cli::commands;
use spellbookx_cli::logging::{self, Log as _, Logger};
use spellbookx_cli::tasks::{PresetOverrides, commitlint, cspell, eslint, prettier, vscode};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    match args.command {
        Command::Version => {
            commands::version::run();
            return ExitCode::SUCCESS;
        }
        Command::Completions(ref opts) => {
            commands::completions::run(opts.shell);
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let name = args.command.name();
    logging::init_subscriber(args.verbose, name);
    let log = Arc::new(Logger::new(name));
    let global = &args.global;

    let result = match args.command {
        Command::Init(opts) => commands::init::run(global, &opts, &log),
        Command::Commitlint => commands::routine::run(
            global,
            Box::new(commitlint::Commitlint),
            PresetOverrides::default(),
            &log,
        ),
        Command::Cspell => commands::routine::run(
            global,
            Box::new(cspell::Cspell),
            PresetOverrides::default(),
            &log,
        ),
        Command::Prettier(opts) => commands::routine::run(
            global,
            Box::new(prettier::Prettier),
            PresetOverrides {
                eslint: None,
                prettier: opts.preset,
            },
            &log,
        ),
        Command::Eslint(opts) => commands::routine::run(
            global,
            Box::new(eslint::Eslint),
            PresetOverrides {
                eslint: opts.preset,
                prettier: None,
            },
            &log,
        ),
        Command::Vscode => commands::routine::run(
            global,
            Box::new(vscode::Vscode),
            PresetOverrides::default(),
            &log,
        ),
        Command::Version | Command::Completions(_) => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
