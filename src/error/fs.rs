//! File system errors

use std::path::Path;

use super::InstallerError;

/// Creates a read error for `path`
pub fn read_failed(path: &Path, err: &std::io::Error) -> InstallerError {
    InstallerError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write error for `path`
pub fn write_failed(path: &Path, err: &std::io::Error) -> InstallerError {
    InstallerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a remove error for `path`
pub fn remove_failed(path: &Path, err: &std::io::Error) -> InstallerError {
    InstallerError::FileRemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> InstallerError {
    InstallerError::IoError {
        message: message.into(),
    }
}
