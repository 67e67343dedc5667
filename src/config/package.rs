//! Package source tree resolution
//!
//! The package tree is the directory the installer was distributed in. By
//! default it is the directory holding the executable; an executable placed
//! in `bin/` next to `package.json` resolves to the parent directory. Without
//! an explicit directory, one of the two must hold `package.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::config::{manifest_parse_failed, package_not_found};
use crate::error::fs::{io_error, read_failed};
use crate::error::Result;

/// Environment variable overriding the package directory
pub const PACKAGE_DIR_ENV: &str = "PI_MESSENGER_PACKAGE_DIR";

/// Package metadata file at the package root
pub const MANIFEST_FILE: &str = "package.json";

/// Metadata read from `package.json`
///
/// Only the fields used for reporting are read; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl PackageManifest {
    /// Load the manifest from `package_dir`, or an empty one if the file is absent
    pub fn load(package_dir: &Path) -> Result<Self> {
        let path = package_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no package manifest");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| read_failed(&path, &e))?;
        serde_json::from_str(&content).map_err(|e| manifest_parse_failed(&path, e.to_string()))
    }

    /// Version for display, e.g. `v0.7.2`
    pub fn version_label(&self) -> String {
        match self.version.as_deref() {
            Some(version) => format!("v{version}"),
            None => "(unknown version)".to_string(),
        }
    }
}

/// Resolve the package directory
///
/// An explicit directory must exist. Without one, the executable location is
/// used and must be a package.
pub fn resolve_package_dir(dir_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = dir_override.filter(|p| !p.as_os_str().is_empty()) {
        if !dir.is_dir() {
            return Err(package_not_found(dir));
        }
        return Ok(dir.to_path_buf());
    }

    let exe = std::env::current_exe()
        .map_err(|e| io_error(format!("Could not locate the running executable: {e}")))?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| package_not_found(&exe))?
        .to_path_buf();

    package_dir_for_exe_dir(exe_dir)
}

fn package_dir_for_exe_dir(exe_dir: PathBuf) -> Result<PathBuf> {
    if exe_dir.join(MANIFEST_FILE).is_file() {
        return Ok(exe_dir);
    }
    match exe_dir.parent() {
        Some(parent)
            if exe_dir.file_name().is_some_and(|n| n == "bin")
                && parent.join(MANIFEST_FILE).is_file() =>
        {
            Ok(parent.to_path_buf())
        }
        _ => {
            tracing::debug!(dir = %exe_dir.display(), "executable is not inside a package");
            Err(package_not_found(&exe_dir))
        }
    }
}
