//! Installer configuration
//!
//! Resolves the fixed target layout under the user's home directory and the
//! package source tree the installer runs from.
//!
//! - [`Layout`]: extension, agents and skills directories
//! - [`package`]: package directory resolution and `package.json` metadata

pub mod package;

use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "PI_MESSENGER_HOME";

/// Name of the extension directory under `extensions/`
pub const EXTENSION_NAME: &str = "pi-messenger";

/// Configuration root of the pi agent, relative to the home directory
const AGENT_ROOT: [&str; 2] = [".pi", "agent"];

/// Target directories derived from a home directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub extension_dir: PathBuf,
    pub agents_dir: PathBuf,
    pub skills_dir: PathBuf,
}

impl Layout {
    /// Build the layout rooted at `home`
    pub fn for_home(home: &Path) -> Self {
        let agent_root = AGENT_ROOT.iter().fold(home.to_path_buf(), |p, c| p.join(c));
        Self {
            extension_dir: agent_root.join("extensions").join(EXTENSION_NAME),
            agents_dir: agent_root.join("agents"),
            skills_dir: agent_root.join("skills"),
        }
    }

    /// Resolve the layout from an explicit home or the platform home directory
    pub fn resolve(home_override: Option<&Path>) -> Result<Self> {
        Ok(Self::for_home(&home_dir(home_override)?))
    }
}

/// Get the home directory
///
/// Uses the explicit override when given (from `--home` or `PI_MESSENGER_HOME`),
/// otherwise the platform home directory.
pub fn home_dir(home_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = home_override.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(home.to_path_buf());
    }
    dirs::home_dir().ok_or(InstallerError::HomeDirNotFound)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_layout_for_home() {
        let layout = Layout::for_home(Path::new("/home/dev"));
        assert_eq!(
            layout.extension_dir,
            PathBuf::from("/home/dev/.pi/agent/extensions/pi-messenger")
        );
        assert_eq!(layout.agents_dir, PathBuf::from("/home/dev/.pi/agent/agents"));
        assert_eq!(layout.skills_dir, PathBuf::from("/home/dev/.pi/agent/skills"));
    }

    #[test]
    fn test_home_dir_prefers_override() {
        let home = home_dir(Some(Path::new("/custom/home"))).unwrap();
        assert_eq!(home, PathBuf::from("/custom/home"));
    }

    #[test]
    fn test_home_dir_ignores_empty_override() {
        let from_empty = home_dir(Some(Path::new("")));
        let from_none = home_dir(None);
        assert_eq!(from_empty.ok(), from_none.ok());
    }

    #[test]
    fn test_layout_resolve_with_override() {
        let layout = Layout::resolve(Some(Path::new("/h"))).unwrap();
        assert_eq!(layout, Layout::for_home(Path::new("/h")));
    }
}
