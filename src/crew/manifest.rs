//! Crew artifact names
//!
//! Names are fixed per release rather than discovered from the package, so
//! a deprecated agent keeps being pruned on every install after it leaves
//! the current set.

use std::collections::HashSet;

use crate::error::Result;
use crate::error::config::invalid;

/// Agent files shipped in `crew/agents/`
pub const CREW_AGENTS: &[&str] = &[
    "crew-planner.md",
    "crew-interview-generator.md",
    "crew-plan-sync.md",
    "crew-worker.md",
    "crew-reviewer.md",
];

/// Agent files from earlier releases, removed on every crew install
pub const DEPRECATED_AGENTS: &[&str] = &[
    "crew-repo-scout.md",
    "crew-practice-scout.md",
    "crew-docs-scout.md",
    "crew-web-scout.md",
    "crew-github-scout.md",
    "crew-gap-analyst.md",
];

/// Skill directories shipped in `skills/`
pub const CREW_SKILLS: &[&str] = &["pi-messenger-crew"];

/// The set of crew artifact names the installer manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewManifest {
    pub agents: &'static [&'static str],
    pub deprecated_agents: &'static [&'static str],
    pub skills: &'static [&'static str],
}

impl CrewManifest {
    /// The names shipped with this release
    pub const fn builtin() -> Self {
        Self {
            agents: CREW_AGENTS,
            deprecated_agents: DEPRECATED_AGENTS,
            skills: CREW_SKILLS,
        }
    }

    /// Reject names listed twice, or listed as both current and deprecated
    pub fn validate(&self) -> Result<()> {
        check_unique("crew agent", self.agents)?;
        check_unique("deprecated agent", self.deprecated_agents)?;
        check_unique("crew skill", self.skills)?;

        if let Some(name) = self
            .agents
            .iter()
            .find(|name| self.deprecated_agents.contains(*name))
        {
            return Err(invalid(format!(
                "agent '{name}' is listed as both current and deprecated"
            )));
        }

        Ok(())
    }

    /// Current and deprecated agent names, current first
    pub fn all_agents(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.agents
            .iter()
            .chain(self.deprecated_agents.iter())
            .copied()
    }
}

fn check_unique(kind: &str, names: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(invalid(format!("{kind} name is empty")));
        }
        if !seen.insert(name) {
            return Err(invalid(format!("{kind} '{name}' is listed more than once")));
        }
    }
    Ok(())
}
