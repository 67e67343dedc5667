//! Common file system operations with unified error handling
//!
//! Both the extension sync and the crew manager build on these primitives.
//! Every helper maps `std::io::Error` to an [`InstallerError`] carrying the
//! offending path.
//!
//! [`InstallerError`]: crate::error::InstallerError

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::fs::{io_error, read_failed, remove_failed, write_failed};
use crate::error::Result;

/// Entry names never copied from a package tree, at any depth
pub const PACKAGE_SKIP_SET: &[&str] = &[".git", "node_modules", ".DS_Store"];

#[derive(Debug, Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    /// Options excluding version-control metadata, dependency caches and OS artifacts
    pub fn package_skip_set() -> Self {
        Self {
            exclude: PACKAGE_SKIP_SET.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn is_excluded(&self, name: &OsStr) -> bool {
        self.exclude
            .iter()
            .any(|excluded| name == OsStr::new(excluded.as_str()))
    }
}

/// Copy a directory recursively with options
///
/// Walks `src` depth-first, creating each directory before its contents.
/// Entries whose name is in `options.exclude` are skipped together with
/// their whole subtree. Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path, options: &CopyOptions) -> Result<usize> {
    let walker = WalkDir::new(src)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !options.is_excluded(entry.file_name()));

    let mut copied = 0;
    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            return Err(io_error(format!(
                "{} escaped copy root {}",
                entry.path().display(),
                src.display()
            )));
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| write_failed(&target, &e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| write_failed(&target, &e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy the regular files directly inside `src` into `dst`
///
/// Subdirectories of `src` are ignored. `dst` is created if needed and
/// existing files are overwritten. Returns the number of files copied.
pub fn copy_files_flat(src: &Path, dst: &Path) -> Result<usize> {
    ensure_dir(dst)?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(|e| read_failed(src, &e))? {
        let entry = entry.map_err(|e| read_failed(src, &e))?;
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|e| read_failed(&path, &e))?;
        if !metadata.is_file() {
            continue;
        }
        copy_file(&path, &dst.join(entry.file_name()))?;
        copied += 1;
    }

    Ok(copied)
}

/// Copy a single file, overwriting the target
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .map(|_| ())
        .map_err(|e| write_failed(dst, &e))
}

/// Create a directory and all of its parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| write_failed(path, &e))
}

/// Remove a file if present; returns whether anything was removed
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| remove_failed(path, &e))?;
    Ok(true)
}

/// Remove a directory tree (or a stray file) if present; returns whether anything was removed
pub fn remove_tree_if_exists(path: &Path) -> Result<bool> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(false);
    };
    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(|e| remove_failed(path, &e))?;
    } else {
        fs::remove_file(path).map_err(|e| remove_failed(path, &e))?;
    }
    Ok(true)
}
