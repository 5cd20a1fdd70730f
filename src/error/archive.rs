//! Archive and file-system errors

use super::ApkSetError;

/// Creates an archive read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ApkSetError {
    ApkSetError::ArchiveReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a table of contents not found error
pub fn toc_not_found(path: impl Into<String>) -> ApkSetError {
    ApkSetError::TocNotFound { path: path.into() }
}

/// Creates a missing artifact entry error
pub fn entry_missing(entry: impl Into<String>) -> ApkSetError {
    ApkSetError::EntryMissing {
        entry: entry.into(),
    }
}

/// Creates an extraction error wrapping the offending entry name
pub fn extract_failed(entry: impl Into<String>, reason: impl Into<String>) -> ApkSetError {
    ApkSetError::ExtractFailed {
        entry: entry.into(),
        reason: reason.into(),
    }
}
