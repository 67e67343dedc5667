//! Common test utilities for pi-messenger integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Current crew agent names shipped by the package
pub const CREW_AGENTS: &[&str] = &[
    "crew-planner.md",
    "crew-interview-generator.md",
    "crew-plan-sync.md",
    "crew-worker.md",
    "crew-reviewer.md",
];

/// Agent names retired in earlier releases
pub const DEPRECATED_AGENTS: &[&str] = &[
    "crew-repo-scout.md",
    "crew-practice-scout.md",
    "crew-docs-scout.md",
    "crew-web-scout.md",
    "crew-github-scout.md",
    "crew-gap-analyst.md",
];

pub const CREW_SKILL: &str = "pi-messenger-crew";

/// A package tree and an isolated home directory
pub struct TestEnv {
    /// Temporary directory
    pub temp: TempDir,
    /// Package source tree
    pub package: PathBuf,
    /// Home directory the installer targets
    pub home: PathBuf,
}

impl TestEnv {
    /// Create an empty package and home
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let package = temp.path().join("package");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&package).expect("Failed to create package directory");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self {
            temp,
            package,
            home,
        }
    }

    /// Create a package with a manifest, sources and skip-set noise
    pub fn with_extension_package(version: &str) -> Self {
        let env = Self::new();
        env.write_package(
            "package.json",
            &format!(r#"{{ "name": "pi-messenger", "version": "{version}" }}"#),
        );
        env.write_package("index.ts", "export default function () {}");
        env.write_package("README.md", "# pi-messenger");
        env.write_package("lib/store.ts", "export const store = {};");
        env.write_package(".git/HEAD", "ref: refs/heads/main");
        env.write_package("node_modules/typebox/index.js", "module.exports = {};");
        env.write_package(".DS_Store", "junk");
        env
    }

    /// Add every current crew agent and the crew skill to the package
    pub fn with_crew(self) -> Self {
        for agent in CREW_AGENTS {
            self.write_package(&format!("crew/agents/{agent}"), &format!("# {agent}"));
        }
        self.write_package(&format!("skills/{CREW_SKILL}/SKILL.md"), "# crew");
        self.write_package(&format!("skills/{CREW_SKILL}/protocol.md"), "protocol");
        self
    }

    /// Write a file in the package tree
    pub fn write_package(&self, path: &str, content: &str) {
        write_file(&self.package.join(path), content);
    }

    /// Write a file under the home directory
    pub fn write_home(&self, path: &str, content: &str) {
        write_file(&self.home.join(path), content);
    }

    pub fn extension_dir(&self) -> PathBuf {
        self.home.join(".pi/agent/extensions/pi-messenger")
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.home.join(".pi/agent/agents")
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.home.join(".pi/agent/skills")
    }

    /// Installer command pointed at this package and home
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pi-messenger").expect("binary should build");
        cmd.env("PI_MESSENGER_HOME", &self.home);
        cmd.env("PI_MESSENGER_PACKAGE_DIR", &self.package);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("CLICOLOR_FORCE");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// BLAKE3 digest of every file under `root`, keyed by relative path
pub fn tree_digest(root: &Path) -> BTreeMap<PathBuf, String> {
    walkdir_files(root)
        .into_iter()
        .map(|path| {
            let content = std::fs::read(root.join(&path)).expect("Failed to read file");
            (path, blake3::hash(&content).to_hex().to_string())
        })
        .collect()
}

/// Relative paths of every file under `root`
pub fn walkdir_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).expect("Failed to read directory") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(
                    path.strip_prefix(root)
                        .expect("entry under root")
                        .to_path_buf(),
                );
            }
        }
    }
    files.sort();
    files
}
