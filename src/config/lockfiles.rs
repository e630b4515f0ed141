//! Lock-file markers used to detect a project's package manager.
use serde::Deserialize;

use crate::resources::package::PackageManagerKind;

/// A file whose presence at the project root identifies a package manager.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LockFileMarker {
    /// File name relative to the project root.
    pub file: String,
    /// Package manager that owns this lock file.
    pub manager: PackageManagerKind,
}

impl LockFileMarker {
    fn new(file: &str, manager: PackageManagerKind) -> Self {
        Self {
            file: file.to_string(),
            manager,
        }
    }
}

/// Ordered lock-file markers; the first one present wins.
///
/// Built once per run and handed to the prober, so tests and settings can
/// inject their own table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockFileTable {
    markers: Vec<LockFileMarker>,
}

impl Default for LockFileTable {
    /// npm, pnpm, yarn, then both bun formats.
    fn default() -> Self {
        Self {
            markers: vec![
                LockFileMarker::new("package-lock.json", PackageManagerKind::Npm),
                LockFileMarker::new("pnpm-lock.yaml", PackageManagerKind::Pnpm),
                LockFileMarker::new("yarn.lock", PackageManagerKind::Yarn),
                LockFileMarker::new("bun.lock", PackageManagerKind::Bun),
                LockFileMarker::new("bun.lockb", PackageManagerKind::Bun),
            ],
        }
    }
}

impl LockFileTable {
    /// Build a table from an explicit marker list.
    #[must_use]
    pub const fn new(markers: Vec<LockFileMarker>) -> Self {
        Self { markers }
    }

    /// Markers in priority order.
    #[must_use]
    pub fn markers(&self) -> &[LockFileMarker] {
        &self.markers
    }

    /// Append `extra` markers after the existing ones.
    ///
    /// Markers whose file name is already in the table are ignored.
    #[must_use]
    pub fn with_extra(mut self, extra: impl IntoIterator<Item = LockFileMarker>) -> Self {
        for marker in extra {
            if !self.markers.iter().any(|m| m.file == marker.file) {
                self.markers.push(marker);
            }
        }
        self
    }
}
