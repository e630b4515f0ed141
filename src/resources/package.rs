//! Package-manager detection and install command planning.
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::config::lockfiles::LockFileTable;

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    /// npm (the fallback when no lock file is found).
    Npm,
    /// pnpm.
    Pnpm,
    /// Yarn.
    Yarn,
    /// Bun.
    Bun,
}

impl PackageManagerKind {
    /// Executable name on PATH.
    #[must_use]
    pub const fn executable(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Leading arguments for a global install.
    const fn global_verb(self) -> &'static [&'static str] {
        match self {
            Self::Npm => &["install", "-g"],
            Self::Pnpm | Self::Bun => &["add", "-g"],
            Self::Yarn => &["global", "add"],
        }
    }

    /// Leading arguments for a project dev-dependency install.
    const fn dev_verb(self) -> &'static [&'static str] {
        match self {
            Self::Npm => &["install", "-D"],
            Self::Pnpm | Self::Yarn | Self::Bun => &["add", "-D"],
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// Result of probing a project for its package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Detected (or fallback) package manager.
    pub kind: PackageManagerKind,
    /// Lock file that decided the result; `None` means npm was assumed.
    pub marker: Option<String>,
}

impl Resolution {
    /// Returns `true` when no lock file was found.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.marker.is_none()
    }
}

/// Detect the package manager from the first lock file of `table` present
/// under `root`.
///
/// Never fails: an unreadable or empty directory resolves to npm with
/// [`Resolution::is_fallback`] set.
#[must_use]
pub fn resolve_package_manager(root: &Path, table: &LockFileTable) -> Resolution {
    table
        .markers()
        .iter()
        .find(|m| root.join(&m.file).is_file())
        .map_or(
            Resolution {
                kind: PackageManagerKind::Npm,
                marker: None,
            },
            |m| Resolution {
                kind: m.manager,
                marker: Some(m.file.clone()),
            },
        )
}

/// Packages a routine installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependencies {
    /// Installed globally (CLIs used outside the project).
    pub global: &'static [&'static str],
    /// Installed as project dev dependencies.
    pub dev: &'static [&'static str],
}

/// Concrete commands for one routine's installs.
///
/// An empty argument list means there is nothing to install for that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Program to run.
    pub program: String,
    /// Arguments for the global install.
    pub global: Vec<String>,
    /// Arguments for the dev-dependency install.
    pub dev: Vec<String>,
}

fn argv(verb: &[&str], packages: &[&str]) -> Vec<String> {
    if packages.is_empty() {
        return Vec::new();
    }
    verb.iter()
        .chain(packages)
        .map(ToString::to_string)
        .collect()
}

/// Build the install commands for `kind`, keeping package order.
///
/// # Examples
///
/// ```
/// use spellbookx_cli::resources::package::{PackageManagerKind, plan_install};
///
/// let plan = plan_install(PackageManagerKind::Yarn, &["eslint"], &["eslint"]);
/// assert_eq!(plan.program, "yarn");
/// assert_eq!(plan.global, ["global", "add", "eslint"]);
/// assert_eq!(plan.dev, ["add", "-D", "eslint"]);
/// ```
#[must_use]
pub fn plan_install(kind: PackageManagerKind, global: &[&str], dev: &[&str]) -> InstallPlan {
    InstallPlan {
        program: kind.executable().to_string(),
        global: argv(kind.global_verb(), global),
        dev: argv(kind.dev_verb(), dev),
    }
}
