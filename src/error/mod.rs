//! Error types and handling for the pi-messenger installer
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructors that attach path context to `std::io::Error` live in
//! sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration and package layout errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Extension errors
    #[error("Existing install at {path} is a git clone")]
    #[diagnostic(
        code(pi_messenger::extension::legacy_git_install),
        help("Remove it first:\n\n  pi-messenger --remove && pi-messenger")
    )]
    LegacyGitInstall { path: String },

    // Crew errors
    #[error("Could not find crew agent files in package: {path}")]
    #[diagnostic(
        code(pi_messenger::crew::source_missing),
        help("Reinstall the pi-messenger package; its crew/agents directory is missing")
    )]
    CrewSourceMissing { path: String },

    // Configuration errors
    #[error("Could not determine home directory")]
    #[diagnostic(
        code(pi_messenger::config::home_not_found),
        help("Pass --home <DIR> or set PI_MESSENGER_HOME")
    )]
    HomeDirNotFound,

    #[error("Package directory not found: {path}")]
    #[diagnostic(
        code(pi_messenger::config::package_not_found),
        help("Pass --package-dir <DIR> or set PI_MESSENGER_PACKAGE_DIR")
    )]
    PackageDirNotFound { path: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pi_messenger::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to parse package manifest {path}: {reason}")]
    #[diagnostic(code(pi_messenger::config::manifest_parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(pi_messenger::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(pi_messenger::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(pi_messenger::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pi_messenger::fs::io_error))]
    IoError { message: String },
}

impl From<walkdir::Error> for InstallerError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(|| "unknown".to_string(), |p| p.display().to_string());
        InstallerError::FileReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;
