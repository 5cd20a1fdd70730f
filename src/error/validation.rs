//! Caller-input validation errors

use super::ApkSetError;

/// Creates an empty module set error
pub fn empty_module_set() -> ApkSetError {
    ApkSetError::EmptyModuleSet
}

/// Creates an unknown module error
pub fn unknown_module(name: impl Into<String>) -> ApkSetError {
    ApkSetError::UnknownModule { name: name.into() }
}

/// Creates a no matching variant error
pub fn no_matching_variant(sdk: u32) -> ApkSetError {
    ApkSetError::NoMatchingVariant { sdk }
}

/// Creates a multiple matching variants error
pub fn multiple_matching_variants(sdk: u32, count: usize) -> ApkSetError {
    ApkSetError::MultipleMatchingVariants { sdk, count }
}

/// Creates an incomplete device spec error from the missing field names
pub fn incomplete_device_spec<I, S>(missing: I) -> ApkSetError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let missing: Vec<String> = missing.into_iter().map(Into::into).collect();
    ApkSetError::IncompleteDeviceSpec {
        missing: missing.join(", "),
    }
}

/// Creates an unknown dimension error
pub fn unknown_dimension(dimension: impl Into<String>, accepted: impl Into<String>) -> ApkSetError {
    ApkSetError::UnknownDimension {
        dimension: dimension.into(),
        accepted: accepted.into(),
    }
}

/// Creates an error for --output-dir combined with a directory APK Set
pub fn output_dir_with_directory_archive() -> ApkSetError {
    ApkSetError::OutputDirWithDirectoryArchive
}

/// Creates an unknown size target error
pub fn unknown_size_target(target: impl Into<String>, accepted: impl Into<String>) -> ApkSetError {
    ApkSetError::UnknownSizeTarget {
        target: target.into(),
        accepted: accepted.into(),
    }
}
