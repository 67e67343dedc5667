//! Extension install/update and remove commands

use console::Style;

use crate::cli::Cli;
use crate::config::{EXTENSION_NAME, Layout};
use crate::config::package::{PackageManifest, resolve_package_dir};
use crate::error::Result;
use crate::extension::{self, ExtensionOutcome, RemoveOutcome};

/// Run the default install-or-update path
pub fn install(cli: &Cli) -> Result<()> {
    let layout = Layout::resolve(cli.home.as_deref())?;
    let package_dir = resolve_package_dir(cli.package_dir.as_deref())?;
    let manifest = PackageManifest::load(&package_dir)?;
    tracing::debug!(
        package = %package_dir.display(),
        dest = %layout.extension_dir.display(),
        "installing extension"
    );

    let dest = &layout.extension_dir;
    let action = match extension::install_or_update(&package_dir, dest)? {
        ExtensionOutcome::AlreadyInstalled => {
            println!(
                "Already installed at {} ({})",
                dest.display(),
                manifest.version_label()
            );
            return Ok(());
        }
        ExtensionOutcome::Installed { files } => {
            tracing::debug!(files, "copied extension files");
            "Installed"
        }
        ExtensionOutcome::Updated { files } => {
            tracing::debug!(files, "copied extension files");
            "Updated"
        }
    };

    println!(
        "{} {} {} → {}",
        Style::new().bold().green().apply_to(action),
        manifest.name.as_deref().unwrap_or(EXTENSION_NAME),
        manifest.version_label(),
        dest.display()
    );
    println!();
    println!("Tools:    pi_messenger");
    println!("Commands: /messenger, /messenger config");
    println!("Docs:     {}", dest.join("README.md").display());

    Ok(())
}

/// Run the `--remove` path
pub fn remove(cli: &Cli) -> Result<()> {
    let layout = Layout::resolve(cli.home.as_deref())?;

    match extension::remove(&layout.extension_dir)? {
        RemoveOutcome::Removed => println!(
            "{} pi-messenger from {}",
            Style::new().bold().green().apply_to("Removed"),
            layout.extension_dir.display()
        ),
        RemoveOutcome::NotInstalled => println!("pi-messenger is not installed"),
    }

    Ok(())
}
