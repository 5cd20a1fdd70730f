//! APK Set internal-consistency errors

use super::ApkSetError;

/// Creates an SDK range overlap error
pub fn sdk_range_overlap(sdk: u32) -> ApkSetError {
    ApkSetError::SdkRangeOverlap { sdk }
}

/// Creates an SDK coverage gap error
pub fn sdk_coverage_gap(sdk: u32) -> ApkSetError {
    ApkSetError::SdkCoverageGap { sdk }
}

/// Creates a missing default artifact error
pub fn missing_default_artifact(module: impl Into<String>) -> ApkSetError {
    ApkSetError::MissingDefaultArtifact {
        module: module.into(),
    }
}

/// Creates a multiple default artifacts error
pub fn multiple_default_artifacts(module: impl Into<String>, count: usize) -> ApkSetError {
    ApkSetError::MultipleDefaultArtifacts {
        module: module.into(),
        count,
    }
}

/// Creates a duplicate alternative error
pub fn duplicate_alternative(
    module: impl Into<String>,
    dimension: impl Into<String>,
    value: impl Into<String>,
) -> ApkSetError {
    ApkSetError::DuplicateAlternative {
        module: module.into(),
        dimension: dimension.into(),
        value: value.into(),
    }
}

/// Creates an unknown dependency error
pub fn unknown_dependency(
    module: impl Into<String>,
    dependency: impl Into<String>,
) -> ApkSetError {
    ApkSetError::UnknownDependency {
        module: module.into(),
        dependency: dependency.into(),
    }
}

/// Creates a dependency cycle error from the offending chain
pub fn dependency_cycle<I, S>(chain: I) -> ApkSetError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let chain: Vec<String> = chain.into_iter().map(Into::into).collect();
    ApkSetError::DependencyCycle {
        chain: chain.join(" -> "),
    }
}

/// Creates a missing module artifacts error
pub fn missing_module_artifacts(module: impl Into<String>, sdk: u32) -> ApkSetError {
    ApkSetError::MissingModuleArtifacts {
        module: module.into(),
        sdk,
    }
}

/// Creates a table of contents parse error
pub fn toc_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ApkSetError {
    ApkSetError::TocParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
