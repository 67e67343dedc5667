//! Extension install, update and removal
//!
//! The extension directory is always a full copy of the package tree minus
//! [`PACKAGE_SKIP_SET`]. Updates never merge: the new tree is staged next to
//! the install directory and swapped in, so files dropped from the package
//! do not linger from an earlier version.
//!
//! [`PACKAGE_SKIP_SET`]: crate::common::fs::PACKAGE_SKIP_SET

use std::fs;
use std::path::Path;

use crate::common::fs::{CopyOptions, copy_dir_recursive, ensure_dir, remove_tree_if_exists};
use crate::error::fs::{io_error, read_failed, write_failed};
use crate::error::{InstallerError, Result};

/// Marker left behind by the old git-clone installer
pub const LEGACY_MARKER: &str = ".git";

const STAGING_PREFIX: &str = ".pi-messenger-staging-";

/// What currently occupies the install directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// Nothing installed
    Absent,
    /// The package is running from the install directory itself
    SameAsSource,
    /// A git clone created by the old installer
    Legacy,
    /// A previous copy made by this installer
    Managed,
}

/// Result of [`install_or_update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionOutcome {
    Installed { files: usize },
    Updated { files: usize },
    AlreadyInstalled,
}

/// Result of [`remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotInstalled,
}

/// Classify the install directory relative to the package tree
pub fn detect_state(source: &Path, dest: &Path) -> Result<InstallState> {
    if !dest.exists() {
        return Ok(InstallState::Absent);
    }

    let source_real = dunce::canonicalize(source).map_err(|e| read_failed(source, &e))?;
    let dest_real = dunce::canonicalize(dest).map_err(|e| read_failed(dest, &e))?;
    if source_real == dest_real {
        return Ok(InstallState::SameAsSource);
    }

    if dest.join(LEGACY_MARKER).exists() {
        return Ok(InstallState::Legacy);
    }

    Ok(InstallState::Managed)
}

/// Make `dest` an exact copy of `source` minus the package skip-set
///
/// A legacy git install is refused untouched; the caller has to remove it
/// first.
pub fn install_or_update(source: &Path, dest: &Path) -> Result<ExtensionOutcome> {
    let state = detect_state(source, dest)?;
    tracing::debug!(?state, dest = %dest.display(), "detected install state");

    match state {
        InstallState::SameAsSource => Ok(ExtensionOutcome::AlreadyInstalled),
        InstallState::Legacy => Err(InstallerError::LegacyGitInstall {
            path: dest.display().to_string(),
        }),
        InstallState::Absent => {
            let files = stage_and_swap(source, dest)?;
            Ok(ExtensionOutcome::Installed { files })
        }
        InstallState::Managed => {
            let files = stage_and_swap(source, dest)?;
            Ok(ExtensionOutcome::Updated { files })
        }
    }
}

/// Delete the install directory if it exists
pub fn remove(dest: &Path) -> Result<RemoveOutcome> {
    if remove_tree_if_exists(dest)? {
        tracing::debug!(dest = %dest.display(), "removed extension");
        Ok(RemoveOutcome::Removed)
    } else {
        Ok(RemoveOutcome::NotInstalled)
    }
}

/// Copy `source` into a staging directory beside `dest`, then replace `dest` with it
///
/// The staging directory shares a parent with `dest`, so the final step is a
/// rename on one filesystem. If copying fails, `dest` is left as it was and the
/// staging directory is dropped.
fn stage_and_swap(source: &Path, dest: &Path) -> Result<usize> {
    let parent = dest
        .parent()
        .ok_or_else(|| io_error(format!("{} has no parent directory", dest.display())))?;
    let name = dest
        .file_name()
        .ok_or_else(|| io_error(format!("{} has no directory name", dest.display())))?;
    ensure_dir(parent)?;

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| write_failed(parent, &e))?;
    let staged = staging.path().join(name);
    tracing::debug!(staging = %staged.display(), "staging extension");

    let files = copy_dir_recursive(source, &staged, &CopyOptions::package_skip_set())?;

    remove_tree_if_exists(dest)?;
    fs::rename(&staged, dest).map_err(|e| write_failed(dest, &e))?;

    Ok(files)
}
