//! CLI definitions using clap derive API
//!
//! The installer takes mode flags rather than subcommands. When several are
//! given, the first in this order wins: `--help`, `--crew-install`,
//! `--crew-uninstall`, `--remove`, then the default install-or-update.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::builder::{Styles, styling::AnsiColor};
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::config::package::PACKAGE_DIR_ENV;
use crate::config::{HOME_ENV, Layout};

/// pi-messenger - Multi-agent coordination for pi
#[derive(Parser, Debug)]
#[command(
    name = "pi-messenger",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Multi-agent coordination for pi",
    long_about = "Installs the pi-messenger extension into ~/.pi/agent/extensions/pi-messenger, \
                  and optionally the crew agents and skills into ~/.pi/agent/agents and \
                  ~/.pi/agent/skills."
)]
pub struct Cli {
    /// Remove the extension
    #[arg(long, short = 'r')]
    pub remove: bool,

    /// Install crew agents and skills
    #[arg(long)]
    pub crew_install: bool,

    /// Remove crew agents and skills
    #[arg(long)]
    pub crew_uninstall: bool,

    /// Home directory the .pi/agent layout lives under
    #[arg(long, value_name = "DIR", env = HOME_ENV)]
    pub home: Option<PathBuf>,

    /// Package directory to install from (defaults to the executable's package)
    #[arg(long, value_name = "DIR", env = PACKAGE_DIR_ENV)]
    pub package_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// The single path an invocation executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CrewInstall,
    CrewUninstall,
    Remove,
    InstallOrUpdate,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.crew_install {
            Action::CrewInstall
        } else if self.crew_uninstall {
            Action::CrewUninstall
        } else if self.remove {
            Action::Remove
        } else {
            Action::InstallOrUpdate
        }
    }
}

/// Parse the process arguments, exiting on `--help`, `--version` or a usage error
pub fn parse() -> Cli {
    let args: Vec<OsString> = std::env::args_os().collect();
    let home = home_from_args(&args).or_else(|| std::env::var_os(HOME_ENV).map(PathBuf::from));
    let matches = Cli::command()
        .after_help(after_help(home.as_deref()))
        .get_matches_from(args);
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Value of `--home` in raw arguments, so help can show the directories it selects
fn home_from_args(args: &[OsString]) -> Option<PathBuf> {
    let mut home = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let Some(arg) = arg.to_str() else { continue };
        if arg == "--" {
            break;
        }
        if arg == "--home" {
            home = iter.next().map(PathBuf::from);
        } else if let Some(value) = arg.strip_prefix("--home=") {
            home = Some(PathBuf::from(value));
        }
    }
    home.filter(|p| !p.as_os_str().is_empty())
}

fn after_help(home: Option<&Path>) -> String {
    let mut text = String::from(
        "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
         pi-messenger                  \x1b[90m# Install or update extension\x1b[0m\n   \
         pi-messenger --remove         \x1b[90m# Remove the extension\x1b[0m\n   \
         pi-messenger --crew-install   \x1b[90m# Install crew agents and skills\x1b[0m\n   \
         pi-messenger --crew-uninstall \x1b[90m# Remove crew agents and skills\x1b[0m\n",
    );

    if let Ok(layout) = Layout::resolve(home) {
        text.push_str(&format!(
            "\nExtension directory: {}\nAgents directory:    {}\nSkills directory:    {}\n",
            layout.extension_dir.display(),
            layout.agents_dir.display(),
            layout.skills_dir.display()
        ));
    }

    text
}
