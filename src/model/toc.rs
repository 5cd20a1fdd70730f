//! Table of contents of an APK Set
//!
//! The table of contents (`toc.json` at the archive root) describes every
//! variant, every per-module artifact, the optional standalone artifacts and
//! the module dependency graph. It is parsed once into read-only structures
//! and validated against the APK Set invariants before any matching runs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, corruption};
use crate::model::targeting::{ArtifactTargeting, Dimension, SdkRange, TargetingValue, base_language};

/// Delivery mode of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    /// Delivered with the initial install
    InstallTime,
    /// Downloaded on request after install
    OnDemand,
    /// Served without installation
    Instant,
}

/// A named unit of app content with a delivery mode and dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub delivery: DeliveryMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// One installable artifact targeted at zero or more device dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "ArtifactTargeting::is_default")]
    pub targeting: ArtifactTargeting,
    /// Archive-relative path of the artifact
    pub path: String,
    /// Compressed size in bytes
    pub size: u64,
}

/// All artifacts of one module within a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    pub module: String,
    pub artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// The single default (untargeted) artifact of this set
    ///
    /// Presence and uniqueness are guaranteed by [`TableOfContents::validate`].
    pub fn default_artifact(&self) -> Result<&Artifact> {
        let mut defaults = self.artifacts.iter().filter(|a| a.targeting.is_default());
        let first = defaults
            .next()
            .ok_or_else(|| corruption::missing_default_artifact(&self.module))?;
        if defaults.next().is_some() {
            let count = self
                .artifacts
                .iter()
                .filter(|a| a.targeting.is_default())
                .count();
            return Err(corruption::multiple_default_artifacts(&self.module, count));
        }
        Ok(first)
    }

    /// Distinct declared alternatives of this set on the given dimension
    pub fn alternatives(&self, dimension: Dimension) -> Vec<TargetingValue> {
        let mut seen = Vec::new();
        for artifact in &self.artifacts {
            if let Some(value) = artifact.targeting.value(dimension) {
                if !seen.contains(&value) {
                    seen.push(value);
                }
            }
        }
        seen
    }

    /// Artifacts declaring the given value on the given dimension
    pub fn artifacts_for(
        &self,
        dimension: Dimension,
        value: &TargetingValue,
    ) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .filter(move |a| a.targeting.value(dimension).as_ref() == Some(value))
    }
}

/// A mutually-exclusive SDK-range bucket of the APK Set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub sdk: SdkRange,
    #[serde(rename = "artifactSets")]
    pub artifact_sets: Vec<ArtifactSet>,
}

impl Variant {
    /// The artifact set for the given module, if the variant carries one
    pub fn artifact_set(&self, module: &str) -> Option<&ArtifactSet> {
        self.artifact_sets.iter().find(|set| set.module == module)
    }
}

/// A self-contained artifact for devices without split-install support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandaloneArtifact {
    pub sdk: SdkRange,
    #[serde(default, skip_serializing_if = "ArtifactTargeting::is_default")]
    pub targeting: ArtifactTargeting,
    pub path: String,
    pub size: u64,
}

/// The parsed, validated table of contents of an APK Set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub standalones: Vec<StandaloneArtifact>,
    pub modules: Vec<ModuleInfo>,
}

impl TableOfContents {
    /// Parse a table of contents from its JSON form and validate it
    pub fn from_json(path: &str, content: &str) -> Result<TableOfContents> {
        let toc: TableOfContents = serde_json::from_str(content)
            .map_err(|e| corruption::toc_parse_failed(path, e.to_string()))?;
        toc.validate()?;
        Ok(toc)
    }

    /// Look up a module by name
    pub fn module(&self, name: &str) -> Option<&ModuleInfo> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// Check the APK Set invariants; any violation is a corruption error
    ///
    /// Checks that variants tile the SDK axis, that every artifact set has
    /// exactly one default artifact and no overlapping same-dimension
    /// alternatives, and that every dependency edge resolves to a module in
    /// the set. Dependency acyclicity is enforced by the module resolver at
    /// traversal time.
    pub fn validate(&self) -> Result<()> {
        self.validate_sdk_coverage()?;
        for variant in &self.variants {
            for set in &variant.artifact_sets {
                set.default_artifact()?;
                validate_alternatives(set)?;
            }
        }
        self.validate_dependencies()?;
        Ok(())
    }

    /// Variants must be mutually exclusive and jointly exhaustive over SDK
    fn validate_sdk_coverage(&self) -> Result<()> {
        let mut ranges: Vec<SdkRange> = self.variants.iter().map(|v| v.sdk).collect();
        ranges.sort_by_key(|range| range.min);

        let mut next_expected = 1;
        for (index, range) in ranges.iter().enumerate() {
            if range.min < next_expected {
                return Err(corruption::sdk_range_overlap(range.min));
            }
            if range.min > next_expected {
                return Err(corruption::sdk_coverage_gap(next_expected));
            }
            match range.max {
                Some(max) => next_expected = max,
                // Unbounded range must be the last one
                None => {
                    return if index == ranges.len() - 1 {
                        Ok(())
                    } else {
                        Err(corruption::sdk_range_overlap(range.min))
                    };
                }
            }
        }
        Err(corruption::sdk_coverage_gap(next_expected))
    }

    fn validate_dependencies(&self) -> Result<()> {
        let names: HashSet<&str> = self.modules.iter().map(|m| m.name.as_str()).collect();
        for module in &self.modules {
            for dependency in &module.dependencies {
                if !names.contains(dependency.as_str()) {
                    return Err(corruption::unknown_dependency(&module.name, dependency));
                }
            }
        }
        Ok(())
    }
}

/// Declared alternatives of one dimension must be pairwise non-overlapping
///
/// ABI and density alternatives overlap on value equality; language
/// alternatives overlap when their base-language subtags collide.
fn validate_alternatives(set: &ArtifactSet) -> Result<()> {
    for dimension in Dimension::ARTIFACT {
        let mut seen: Vec<String> = Vec::new();
        for artifact in &set.artifacts {
            let Some(value) = artifact.targeting.value(dimension) else {
                continue;
            };
            let key = match &value {
                TargetingValue::Language(tag) => base_language(tag).to_string(),
                other => other.to_string(),
            };
            if seen.contains(&key) {
                return Err(corruption::duplicate_alternative(
                    &set.module,
                    dimension.to_string(),
                    key,
                ));
            }
            seen.push(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApkSetError;

    fn artifact(path: &str, size: u64, targeting: ArtifactTargeting) -> Artifact {
        Artifact {
            targeting,
            path: path.to_string(),
            size,
        }
    }

    fn abi_targeting(abi: &str) -> ArtifactTargeting {
        ArtifactTargeting {
            abi: Some(abi.to_string()),
            ..Default::default()
        }
    }

    fn base_set() -> ArtifactSet {
        ArtifactSet {
            module: "base".to_string(),
            artifacts: vec![
                artifact("splits/base-master.apk", 100, ArtifactTargeting::default()),
                artifact("splits/base-arm64_v8a.apk", 520, abi_targeting("arm64-v8a")),
            ],
        }
    }

    fn single_variant_toc() -> TableOfContents {
        TableOfContents {
            variants: vec![Variant {
                sdk: SdkRange::from(1),
                artifact_sets: vec![base_set()],
            }],
            standalones: vec![],
            modules: vec![ModuleInfo {
                name: "base".to_string(),
                delivery: DeliveryMode::InstallTime,
                dependencies: vec![],
            }],
        }
    }

    #[test]
    fn test_valid_toc_passes() {
        assert!(single_variant_toc().validate().is_ok());
    }

    #[test]
    fn test_default_artifact_lookup() {
        let set = base_set();
        assert_eq!(
            set.default_artifact().unwrap().path,
            "splits/base-master.apk"
        );
    }

    #[test]
    fn test_missing_default_artifact() {
        let set = ArtifactSet {
            module: "maps".to_string(),
            artifacts: vec![artifact("a.apk", 10, abi_targeting("x86"))],
        };
        assert!(matches!(
            set.default_artifact().unwrap_err(),
            ApkSetError::MissingDefaultArtifact { .. }
        ));
    }

    #[test]
    fn test_multiple_default_artifacts() {
        let set = ArtifactSet {
            module: "maps".to_string(),
            artifacts: vec![
                artifact("a.apk", 10, ArtifactTargeting::default()),
                artifact("b.apk", 20, ArtifactTargeting::default()),
            ],
        };
        assert!(matches!(
            set.default_artifact().unwrap_err(),
            ApkSetError::MultipleDefaultArtifacts { count: 2, .. }
        ));
    }

    #[test]
    fn test_sdk_gap_detected() {
        let mut toc = single_variant_toc();
        toc.variants = vec![
            Variant {
                sdk: SdkRange::between(1, 21),
                artifact_sets: vec![base_set()],
            },
            Variant {
                sdk: SdkRange::from(23),
                artifact_sets: vec![base_set()],
            },
        ];
        assert!(matches!(
            toc.validate().unwrap_err(),
            ApkSetError::SdkCoverageGap { sdk: 21 }
        ));
    }

    #[test]
    fn test_sdk_overlap_detected() {
        let mut toc = single_variant_toc();
        toc.variants = vec![
            Variant {
                sdk: SdkRange::between(1, 24),
                artifact_sets: vec![base_set()],
            },
            Variant {
                sdk: SdkRange::from(23),
                artifact_sets: vec![base_set()],
            },
        ];
        assert!(matches!(
            toc.validate().unwrap_err(),
            ApkSetError::SdkRangeOverlap { sdk: 23 }
        ));
    }

    #[test]
    fn test_unbounded_variant_must_be_last() {
        let mut toc = single_variant_toc();
        toc.variants = vec![
            Variant {
                sdk: SdkRange::from(1),
                artifact_sets: vec![base_set()],
            },
            Variant {
                sdk: SdkRange::from(21),
                artifact_sets: vec![base_set()],
            },
        ];
        assert!(toc.validate().is_err());
    }

    #[test]
    fn test_duplicate_abi_alternative() {
        let mut toc = single_variant_toc();
        toc.variants[0].artifact_sets[0]
            .artifacts
            .push(artifact("dup.apk", 30, abi_targeting("arm64-v8a")));
        assert!(matches!(
            toc.validate().unwrap_err(),
            ApkSetError::DuplicateAlternative { .. }
        ));
    }

    #[test]
    fn test_language_overlap_by_base_subtag() {
        let mut toc = single_variant_toc();
        let lang = |tag: &str| ArtifactTargeting {
            language: Some(tag.to_string()),
            ..Default::default()
        };
        toc.variants[0].artifact_sets[0]
            .artifacts
            .push(artifact("en_us.apk", 5, lang("en-US")));
        toc.variants[0].artifact_sets[0]
            .artifacts
            .push(artifact("en_gb.apk", 5, lang("en-GB")));
        assert!(matches!(
            toc.validate().unwrap_err(),
            ApkSetError::DuplicateAlternative { .. }
        ));
    }

    #[test]
    fn test_unknown_dependency_detected() {
        let mut toc = single_variant_toc();
        toc.modules[0].dependencies = vec!["assets".to_string()];
        assert!(matches!(
            toc.validate().unwrap_err(),
            ApkSetError::UnknownDependency { .. }
        ));
    }

    #[test]
    fn test_alternatives_are_distinct_and_ordered() {
        let set = ArtifactSet {
            module: "base".to_string(),
            artifacts: vec![
                artifact("m.apk", 1, ArtifactTargeting::default()),
                artifact("a.apk", 1, abi_targeting("armeabi-v7a")),
                artifact("b.apk", 1, abi_targeting("arm64-v8a")),
            ],
        };
        assert_eq!(
            set.alternatives(Dimension::Abi),
            vec![
                TargetingValue::Abi("armeabi-v7a".to_string()),
                TargetingValue::Abi("arm64-v8a".to_string()),
            ]
        );
        assert!(set.alternatives(Dimension::Language).is_empty());
    }

    #[test]
    fn test_toc_json_round_trip() {
        let toc = single_variant_toc();
        let json = serde_json::to_string(&toc).unwrap();
        let parsed = TableOfContents::from_json("toc.json", &json).unwrap();
        assert_eq!(parsed, toc);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = TableOfContents::from_json("toc.json", "{not json").unwrap_err();
        assert!(matches!(err, ApkSetError::TocParseFailed { .. }));
    }
}
