//! Targeting dimensions and per-artifact targeting values
//!
//! A dimension is one axis of device variability an APK Set splits on.
//! SDK targets whole variants; ABI, screen density and language target
//! individual artifacts within a module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An axis of device variability used for splitting and size expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Sdk,
    Abi,
    ScreenDensity,
    Language,
}

impl Dimension {
    /// All concrete dimensions, in report column order
    pub const ALL: [Dimension; 4] = [
        Dimension::Sdk,
        Dimension::Abi,
        Dimension::ScreenDensity,
        Dimension::Language,
    ];

    /// Dimensions that target individual artifacts, in evaluation order
    pub const ARTIFACT: [Dimension; 3] = [
        Dimension::Abi,
        Dimension::ScreenDensity,
        Dimension::Language,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Sdk => write!(f, "SDK"),
            Dimension::Abi => write!(f, "ABI"),
            Dimension::ScreenDensity => write!(f, "SCREEN_DENSITY"),
            Dimension::Language => write!(f, "LANGUAGE"),
        }
    }
}

/// A half-open SDK range `[min, max)`; `max = None` means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkRange {
    pub min: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl SdkRange {
    /// Range covering every SDK value from `min` upwards
    pub fn from(min: u32) -> Self {
        SdkRange { min, max: None }
    }

    /// Bounded range `[min, max)`
    pub fn between(min: u32, max: u32) -> Self {
        SdkRange {
            min,
            max: Some(max),
        }
    }

    /// Whether the given SDK value falls inside this range
    pub fn contains(&self, sdk: u32) -> bool {
        sdk >= self.min && self.max.is_none_or(|max| sdk < max)
    }
}

impl fmt::Display for SdkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{},{})", self.min, max),
            None => write!(f, "[{},∞)", self.min),
        }
    }
}

/// Per-artifact targeting: absence on a dimension means "default for that dimension"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTargeting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ArtifactTargeting {
    /// Whether this targeting declares no dimension at all (a default/master artifact)
    pub fn is_default(&self) -> bool {
        self.abi.is_none() && self.density.is_none() && self.language.is_none()
    }

    /// The declared value on the given dimension, if any
    pub fn value(&self, dimension: Dimension) -> Option<TargetingValue> {
        match dimension {
            Dimension::Sdk => None,
            Dimension::Abi => self.abi.clone().map(TargetingValue::Abi),
            Dimension::ScreenDensity => self.density.map(TargetingValue::Density),
            Dimension::Language => self.language.clone().map(TargetingValue::Language),
        }
    }
}

/// A concrete declared alternative on one artifact dimension
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetingValue {
    Abi(String),
    Density(u32),
    Language(String),
}

impl fmt::Display for TargetingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingValue::Abi(abi) => write!(f, "{abi}"),
            TargetingValue::Density(density) => write!(f, "{density}"),
            TargetingValue::Language(language) => write!(f, "{language}"),
        }
    }
}

/// Base-language subtag of a BCP-47 tag ("en-US" -> "en")
pub fn base_language(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}
