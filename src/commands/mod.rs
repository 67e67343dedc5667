//! Command implementations for the pi-messenger installer

pub mod crew;
pub mod extension;

use crate::cli::{Action, Cli};
use crate::crew::CrewManifest;
use crate::error::Result;

/// Run the action selected by the CLI flags
pub fn run(cli: &Cli) -> Result<()> {
    CrewManifest::builtin().validate()?;

    let action = cli.action();
    tracing::debug!(?action, "selected action");

    match action {
        Action::CrewInstall => crew::install(cli),
        Action::CrewUninstall => crew::uninstall(cli),
        Action::Remove => extension::remove(cli),
        Action::InstallOrUpdate => extension::install(cli),
    }
}
