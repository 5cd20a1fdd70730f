//! Error types and handling for apkset
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`validation`]: Caller-input errors (bad flags, bad device specs)
//! - [`corruption`]: Internal-consistency failures in a parsed APK Set
//! - [`archive`]: Archive and file-system errors
//! - [`spec`]: Device spec file errors

pub mod archive;
pub mod corruption;
pub mod spec;
pub mod validation;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for apkset operations
#[derive(Error, Diagnostic, Debug)]
pub enum ApkSetError {
    // Validation errors (caller input)
    #[error("The set of modules cannot be empty")]
    #[diagnostic(
        code(apkset::validation::empty_modules),
        help("Pass at least one module name with --modules, or drop the flag to use the defaults")
    )]
    EmptyModuleSet,

    #[error("Module '{name}' not found in the APK Set")]
    #[diagnostic(
        code(apkset::validation::unknown_module),
        help("Check the module name against the table of contents of the archive")
    )]
    UnknownModule { name: String },

    #[error("No variant matches a device with SDK {sdk}")]
    #[diagnostic(
        code(apkset::validation::no_matching_variant),
        help("The APK Set was not built for this device configuration")
    )]
    NoMatchingVariant { sdk: u32 },

    #[error("{count} variants match a device with SDK {sdk}")]
    #[diagnostic(code(apkset::validation::multiple_matching_variants))]
    MultipleMatchingVariants { sdk: u32, count: usize },

    #[error("Device spec is missing required field(s): {missing}")]
    #[diagnostic(
        code(apkset::validation::incomplete_device_spec),
        help(
            "extract requires a full device spec: sdkVersion, supportedAbis, screenDensity and supportedLocales must all be set"
        )
    )]
    IncompleteDeviceSpec { missing: String },

    #[error("Unrecognized size target: '{target}'. Accepted values are: {accepted}")]
    #[diagnostic(code(apkset::validation::unknown_size_target))]
    UnknownSizeTarget { target: String, accepted: String },

    #[error("Unrecognized dimension: '{dimension}'. Accepted values are: {accepted}")]
    #[diagnostic(code(apkset::validation::unknown_dimension))]
    UnknownDimension { dimension: String, accepted: String },

    #[error("Output directory should not be set when the APK Set is a directory")]
    #[diagnostic(
        code(apkset::validation::output_dir_with_directory),
        help("Artifacts inside a directory APK Set are used in place; drop --output-dir")
    )]
    OutputDirWithDirectoryArchive,

    // Corruption errors (invariant violation in the parsed archive)
    #[error("Variant SDK ranges overlap at SDK {sdk}")]
    #[diagnostic(
        code(apkset::corruption::sdk_range_overlap),
        help("Variants of an APK Set must be mutually exclusive on the SDK axis")
    )]
    SdkRangeOverlap { sdk: u32 },

    #[error("No variant covers SDK values starting at {sdk}")]
    #[diagnostic(
        code(apkset::corruption::sdk_coverage_gap),
        help("Variants of an APK Set must jointly cover every SDK value")
    )]
    SdkCoverageGap { sdk: u32 },

    #[error("Module '{module}' has no default artifact")]
    #[diagnostic(
        code(apkset::corruption::missing_default_artifact),
        help("Every module must ship exactly one untargeted (master) artifact")
    )]
    MissingDefaultArtifact { module: String },

    #[error("Module '{module}' has {count} default artifacts")]
    #[diagnostic(code(apkset::corruption::multiple_default_artifacts))]
    MultipleDefaultArtifacts { module: String, count: usize },

    #[error("Module '{module}' declares the {dimension} alternative '{value}' more than once")]
    #[diagnostic(code(apkset::corruption::duplicate_alternative))]
    DuplicateAlternative {
        module: String,
        dimension: String,
        value: String,
    },

    #[error("Module '{module}' depends on '{dependency}' which is not in the APK Set")]
    #[diagnostic(code(apkset::corruption::unknown_dependency))]
    UnknownDependency { module: String, dependency: String },

    #[error("Dependency cycle detected: {chain}")]
    #[diagnostic(code(apkset::corruption::dependency_cycle))]
    DependencyCycle { chain: String },

    #[error("Variant for SDK {sdk}+ has no artifacts for module '{module}'")]
    #[diagnostic(code(apkset::corruption::missing_module_artifacts))]
    MissingModuleArtifacts { module: String, sdk: u32 },

    #[error("Failed to parse table of contents: {path}")]
    #[diagnostic(code(apkset::corruption::toc_parse_failed))]
    TocParseFailed { path: String, reason: String },

    // Archive and file-system errors
    #[error("Failed to read APK Set archive: {path}")]
    #[diagnostic(code(apkset::archive::read_failed))]
    ArchiveReadFailed { path: String, reason: String },

    #[error("Table of contents 'toc.json' not found in APK Set: {path}")]
    #[diagnostic(
        code(apkset::archive::toc_not_found),
        help("The archive must carry a toc.json entry at its root")
    )]
    TocNotFound { path: String },

    #[error("Artifact entry '{entry}' referenced by the table of contents is missing")]
    #[diagnostic(code(apkset::archive::entry_missing))]
    EntryMissing { entry: String },

    #[error("Error while extracting artifact '{entry}' from the APK Set")]
    #[diagnostic(code(apkset::archive::extract_failed))]
    ExtractFailed { entry: String, reason: String },

    // Device spec file errors
    #[error("Failed to read device spec file: {path}")]
    #[diagnostic(code(apkset::spec::read_failed))]
    SpecReadFailed { path: String, reason: String },

    #[error("Failed to parse device spec file: {path}")]
    #[diagnostic(
        code(apkset::spec::parse_failed),
        help("Device specs are JSON (or YAML) objects with sdkVersion, supportedAbis, screenDensity, supportedLocales")
    )]
    SpecParseFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(apkset::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ApkSetError {
    fn from(err: std::io::Error) -> Self {
        ApkSetError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for ApkSetError {
    fn from(err: zip::result::ZipError) -> Self {
        ApkSetError::IoError {
            message: err.to_string(),
        }
    }
}

impl ApkSetError {
    /// Whether this error reports a corrupted APK Set rather than bad caller input
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            ApkSetError::SdkRangeOverlap { .. }
                | ApkSetError::SdkCoverageGap { .. }
                | ApkSetError::MissingDefaultArtifact { .. }
                | ApkSetError::MultipleDefaultArtifacts { .. }
                | ApkSetError::DuplicateAlternative { .. }
                | ApkSetError::UnknownDependency { .. }
                | ApkSetError::DependencyCycle { .. }
                | ApkSetError::MissingModuleArtifacts { .. }
                | ApkSetError::TocParseFailed { .. }
        )
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ApkSetError>;
