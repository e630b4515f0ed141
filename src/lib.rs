//! Project bootstrap engine.
//!
//! Installs lint, format, spell-check and commit tooling into an existing
//! JavaScript project through whichever package manager the project uses,
//! then writes the matching configuration files without ever discarding a
//! file that was already there.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: lock-file tables and the optional `spellbookx.toml`
//! - **[`resources`]**: package-manager detection, install planning, and
//!   loss-free file materialization
//! - **[`tasks`]**: the routines and the fail-fast orchestrator
//! - **[`commands`]**: top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod presets;
pub mod prompt;
pub mod resources;
pub mod tasks;
pub mod templates;
