//! pi-messenger installer
//!
//! Copies the pi-messenger package into `~/.pi/agent/extensions/pi-messenger`
//! and manages the optional crew agents and skills next to it.

use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod crew;
mod error;
mod extension;
mod logging;

use error::InstallerError;

fn report_error(err: &InstallerError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!();
        eprintln!("{help}");
    }
}

fn main() {
    let cli = cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::run(&cli) {
        report_error(&e);
        std::process::exit(1);
    }
}
