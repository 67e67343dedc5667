//! Crew install and uninstall commands

use console::Style;

use crate::cli::Cli;
use crate::config::Layout;
use crate::config::package::resolve_package_dir;
use crate::crew::{CrewManager, CrewManifest};
use crate::error::Result;

/// Run the `--crew-install` path
pub fn install(cli: &Cli) -> Result<()> {
    let layout = Layout::resolve(cli.home.as_deref())?;
    let package_dir = resolve_package_dir(cli.package_dir.as_deref())?;

    let report = CrewManager::new(CrewManifest::builtin(), &layout).install(&package_dir)?;
    if report.pruned > 0 {
        tracing::info!(pruned = report.pruned, "removed deprecated crew agents");
    }

    println!(
        "{} ({} new, {} updated)",
        Style::new().bold().green().apply_to("Crew installed"),
        report.installed,
        report.updated
    );
    println!("  Agents: {}", layout.agents_dir.display());
    println!("  Skills: {}", layout.skills_dir.display());

    Ok(())
}

/// Run the `--crew-uninstall` path
///
/// Needs no package: the names to remove come from the built-in manifest.
pub fn uninstall(cli: &Cli) -> Result<()> {
    let layout = Layout::resolve(cli.home.as_deref())?;
    let report = CrewManager::new(CrewManifest::builtin(), &layout).uninstall()?;

    if report.is_empty() {
        println!("Nothing to remove");
    } else {
        println!(
            "Removed {} crew file(s) from {} and {}",
            report.removed,
            layout.agents_dir.display(),
            layout.skills_dir.display()
        );
    }

    Ok(())
}
