//! Device spec file errors

use super::ApkSetError;

/// Creates a device spec read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ApkSetError {
    ApkSetError::SpecReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a device spec parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ApkSetError {
    ApkSetError::SpecParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
