//! Configuration errors

use std::path::Path;

use super::InstallerError;

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> InstallerError {
    InstallerError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a package manifest parse error
pub fn manifest_parse_failed(path: &Path, reason: impl Into<String>) -> InstallerError {
    InstallerError::ManifestParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a package directory not found error
pub fn package_not_found(path: &Path) -> InstallerError {
    InstallerError::PackageDirNotFound {
        path: path.display().to_string(),
    }
}
