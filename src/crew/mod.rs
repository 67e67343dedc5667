//! Crew artifact lifecycle
//!
//! Crew artifacts are installed independently of the extension:
//! - agents: single files copied from `crew/agents/<name>` into the agents directory
//! - skills: directories whose top-level files are copied from `skills/<name>`
//!   into `<skills dir>/<name>`
//!
//! Every install first prunes deprecated agents, then copies whatever current
//! artifacts the package ships. A current artifact missing from the package is
//! skipped without error.

pub mod manifest;

use std::path::{Path, PathBuf};

use crate::common::fs::{
    copy_file, copy_files_flat, ensure_dir, remove_file_if_exists, remove_tree_if_exists,
};
use crate::config::Layout;
use crate::error::{InstallerError, Result};

pub use manifest::CrewManifest;

/// Package-relative directory holding agent files
const AGENTS_SOURCE: [&str; 2] = ["crew", "agents"];

/// Package-relative directory holding skill directories
const SKILLS_SOURCE: &str = "skills";

/// Outcome of a crew install or update
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrewInstallReport {
    /// Artifacts whose destination did not exist before
    pub installed: usize,
    /// Artifacts that replaced an existing destination
    pub updated: usize,
    /// Deprecated agents deleted during migration
    pub pruned: usize,
}

impl CrewInstallReport {
    fn record(&mut self, existed: bool) {
        if existed {
            self.updated += 1;
        } else {
            self.installed += 1;
        }
    }
}

/// Outcome of a crew uninstall
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrewRemovalReport {
    pub removed: usize,
}

impl CrewRemovalReport {
    pub fn is_empty(&self) -> bool {
        self.removed == 0
    }
}

/// Installs and removes crew agents and skills
#[derive(Debug)]
pub struct CrewManager<'a> {
    manifest: CrewManifest,
    layout: &'a Layout,
}

/// Directory in the package holding agent files
pub fn agents_source(package_dir: &Path) -> PathBuf {
    AGENTS_SOURCE
        .iter()
        .fold(package_dir.to_path_buf(), |p, c| p.join(c))
}

/// Directory in the package holding skill directories
pub fn skills_source(package_dir: &Path) -> PathBuf {
    package_dir.join(SKILLS_SOURCE)
}

impl<'a> CrewManager<'a> {
    pub fn new(manifest: CrewManifest, layout: &'a Layout) -> Self {
        Self { manifest, layout }
    }

    /// Install or update every crew artifact the package ships
    ///
    /// Fails before touching the target directories when the package has no
    /// agents directory at all.
    pub fn install(&self, package_dir: &Path) -> Result<CrewInstallReport> {
        let agents_source = agents_source(package_dir);
        if !agents_source.is_dir() {
            return Err(InstallerError::CrewSourceMissing {
                path: agents_source.display().to_string(),
            });
        }

        ensure_dir(&self.layout.agents_dir)?;
        ensure_dir(&self.layout.skills_dir)?;

        let mut report = CrewInstallReport {
            pruned: self.prune_deprecated()?,
            ..CrewInstallReport::default()
        };

        for agent in self.manifest.agents {
            let src = agents_source.join(agent);
            if !src.is_file() {
                tracing::debug!(agent, "agent not in package, skipping");
                continue;
            }
            let dst = self.layout.agents_dir.join(agent);
            let existed = dst.exists();
            copy_file(&src, &dst)?;
            tracing::debug!(agent, existed, "copied agent");
            report.record(existed);
        }

        let skills_source = skills_source(package_dir);
        for skill in self.manifest.skills {
            let src = skills_source.join(skill);
            if !src.is_dir() {
                tracing::debug!(skill, "skill not in package, skipping");
                continue;
            }
            let dst = self.layout.skills_dir.join(skill);
            let existed = dst.exists();
            let files = copy_files_flat(&src, &dst)?;
            tracing::debug!(skill, files, existed, "copied skill");
            report.record(existed);
        }

        Ok(report)
    }

    /// Remove every current and deprecated agent and every current skill
    pub fn uninstall(&self) -> Result<CrewRemovalReport> {
        let mut report = CrewRemovalReport::default();

        for agent in self.manifest.all_agents() {
            if remove_file_if_exists(&self.layout.agents_dir.join(agent))? {
                tracing::debug!(agent, "removed agent");
                report.removed += 1;
            }
        }

        for skill in self.manifest.skills {
            if remove_tree_if_exists(&self.layout.skills_dir.join(skill))? {
                tracing::debug!(skill, "removed skill");
                report.removed += 1;
            }
        }

        Ok(report)
    }

    fn prune_deprecated(&self) -> Result<usize> {
        let mut pruned = 0;
        for agent in self.manifest.deprecated_agents {
            if remove_file_if_exists(&self.layout.agents_dir.join(agent))? {
                tracing::debug!(agent, "pruned deprecated agent");
                pruned += 1;
            }
        }
        Ok(pruned)
    }
}
