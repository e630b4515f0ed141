//! Backups of pre-existing files.
//!
//! An existing file is renamed to `<file>.bak` before it is replaced. A
//! previous `<file>.bak` is first rotated to `<file>.bak.<timestamp>`, so a
//! backup is never overwritten. If even the rotated name is taken, a
//! numeric suffix (`.1`, `.2`, ...) is appended.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::SetupError;

/// Extension appended to backed-up files.
pub const BACKUP_EXT: &str = "bak";

/// `<path>.bak`
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    with_suffix(path, BACKUP_EXT)
}

/// Current UTC time formatted for use in a file name
/// (`2026-10-15T12-30-00-123Z`).
#[must_use]
pub fn timestamp_suffix() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H-%M-%S-%3fZ")
        .to_string()
}

/// Append `.{suffix}` to the full file name of `path`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Return `candidate`, or `candidate.N` for the first free `N`.
fn unique_path(candidate: PathBuf) -> PathBuf {
    if !exists(&candidate) {
        return candidate;
    }
    let mut n = 1u32;
    loop {
        let next = with_suffix(&candidate, &n.to_string());
        if !exists(&next) {
            return next;
        }
        n += 1;
    }
}

/// Like [`Path::exists`] but also true for dangling symlinks.
fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

fn rename(from: &Path, to: &Path) -> Result<(), SetupError> {
    std::fs::rename(from, to).map_err(|source| SetupError::FilesystemBackupFailed {
        path: from.to_path_buf(),
        backup: to.to_path_buf(),
        source,
    })
}

/// Paths touched by a backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Where the previous `.bak` was rotated to, if there was one.
    pub rotated: Option<PathBuf>,
    /// The new `.bak` holding the file's former contents.
    pub backup: PathBuf,
}

/// Move an existing `<path>.bak` out of the way.
///
/// Returns the rotated location, or `None` if there was no backup.
///
/// # Errors
///
/// Returns [`SetupError::FilesystemBackupFailed`] if the rename fails.
pub fn rotate_backup(path: &Path, timestamp: &str) -> Result<Option<PathBuf>, SetupError> {
    let bak = backup_path(path);
    if !exists(&bak) {
        return Ok(None);
    }
    let rotated = unique_path(with_suffix(&bak, timestamp));
    rename(&bak, &rotated)?;
    Ok(Some(rotated))
}

/// Rotate any earlier backup, then rename `path` to `<path>.bak`.
///
/// `path` must exist. When this returns `Ok`, `path` is free to be written.
///
/// # Errors
///
/// Returns [`SetupError::FilesystemBackupFailed`] if either rename fails.
pub fn back_up(path: &Path) -> Result<BackupReport, SetupError> {
    back_up_at(path, &timestamp_suffix())
}

pub(crate) fn back_up_at(path: &Path, timestamp: &str) -> Result<BackupReport, SetupError> {
    let rotated = rotate_backup(path, timestamp)?;
    let backup = backup_path(path);
    rename(path, &backup)?;
    Ok(BackupReport { rotated, backup })
}

/// Move a superseded config file aside without replacing it.
///
/// Uses `<path>.bak`, or `<path>.<timestamp>.bak` when that is taken.
/// Returns `None` if `path` does not exist.
///
/// # Errors
///
/// Returns [`SetupError::FilesystemBackupFailed`] if the rename fails.
pub fn back_up_legacy(path: &Path) -> Result<Option<PathBuf>, SetupError> {
    back_up_legacy_at(path, &timestamp_suffix())
}

pub(crate) fn back_up_legacy_at(
    path: &Path,
    timestamp: &str,
) -> Result<Option<PathBuf>, SetupError> {
    if !exists(path) {
        return Ok(None);
    }
    let mut target = backup_path(path);
    if exists(&target) {
        target = unique_path(with_suffix(&with_suffix(path, timestamp), BACKUP_EXT));
    }
    rename(path, &target)?;
    Ok(Some(target))
}

/// Backups that currently exist next to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupChain {
    /// `<file>.bak`, if present.
    pub primary: Option<PathBuf>,
    /// Rotated `<file>.bak.<timestamp>` siblings, oldest first.
    pub rotated: Vec<PathBuf>,
}

impl BackupChain {
    /// Collect the backups of `path` from its parent directory.
    ///
    /// An unreadable directory yields an empty chain.
    #[must_use]
    pub fn scan(path: &Path) -> Self {
        let primary = Some(backup_path(path)).filter(|p| exists(p));

        let prefix = match path.file_name() {
            Some(name) => {
                let mut prefix = name.to_os_string();
                prefix.push(".");
                prefix.push(BACKUP_EXT);
                prefix.push(".");
                prefix.to_string_lossy().into_owned()
            }
            None => return Self::default(),
        };
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut rotated: Vec<PathBuf> = std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .filter(|e| e.file_name().to_string_lossy().starts_with(&prefix))
                    .map(|e| e.path())
                    .collect()
            })
            .unwrap_or_default();
        // Timestamps sort lexicographically.
        rotated.sort();

        Self { primary, rotated }
    }

    /// Total number of backups.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.primary.is_some()) + self.rotated.len()
    }

    /// Returns `true` if no backup exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
