//! Artifact selection for a matched variant
//!
//! Given the matched variant, the resolved module set and a concrete device,
//! picks the minimal covering set of artifacts: the default artifact of every
//! resolved module plus, per dimension present among that module's artifacts,
//! at most one best alternative per the matcher rules. A standalone artifact
//! matching the device short-circuits everything and is returned alone.

use std::collections::BTreeSet;

use crate::error::{Result, corruption};
use crate::matcher::{DimensionMatcher, artifact_matchers, density::DensityMatcher};
use crate::model::{
    Artifact, DeviceSpec, StandaloneArtifact, TableOfContents, TargetingValue, Variant,
    base_language,
};

/// Select the artifact paths to deliver to the device
///
/// Standalone precedence applies: when a standalone artifact matches the
/// device, its path is returned alone and module resolution is skipped.
/// The result is ordered and deterministic: modules in name order, the
/// default artifact first, then the dimension picks in matcher order.
pub fn select_artifacts(
    toc: &TableOfContents,
    variant: &Variant,
    modules: &BTreeSet<String>,
    device: &DeviceSpec,
) -> Result<Vec<String>> {
    if let Some(standalone) = match_standalone(toc, device) {
        return Ok(vec![standalone.path.clone()]);
    }
    let artifacts = select_split_artifacts(variant, modules, device)?;
    Ok(artifacts.iter().map(|a| a.path.clone()).collect())
}

/// Select the split artifacts of a variant, ignoring standalones
///
/// Used directly by the size aggregator, which accounts for standalone
/// artifacts separately.
pub fn select_split_artifacts<'a>(
    variant: &'a Variant,
    modules: &BTreeSet<String>,
    device: &DeviceSpec,
) -> Result<Vec<&'a Artifact>> {
    let mut selected: Vec<&Artifact> = Vec::new();
    for module in modules {
        let set = variant
            .artifact_set(module)
            .ok_or_else(|| corruption::missing_module_artifacts(module, variant.sdk.min))?;

        push_unique(&mut selected, set.default_artifact()?);

        for matcher in artifact_matchers() {
            let declared = set.alternatives(matcher.dimension());
            if declared.is_empty() {
                continue;
            }
            if let Some(value) = matcher.best_alternative(device, &declared) {
                if let Some(artifact) = set.artifacts_for(matcher.dimension(), &value).next() {
                    push_unique(&mut selected, artifact);
                }
            }
        }
    }
    Ok(selected)
}

/// The standalone artifact matching the device, if any
///
/// A standalone is compatible when the device SDK falls in its range and
/// every dimension it declares is supported by the device. Among compatible
/// candidates the best one wins: ABI by device preference order, then density
/// by the density rule over the candidates' declared densities, then language
/// by device locale order, with the path as the final deterministic
/// tie-break.
pub fn match_standalone<'a>(
    toc: &'a TableOfContents,
    device: &DeviceSpec,
) -> Option<&'a StandaloneArtifact> {
    let sdk = device.sdk_version?;
    let candidates: Vec<&StandaloneArtifact> = toc
        .standalones
        .iter()
        .filter(|s| s.sdk.contains(sdk) && standalone_compatible(s, device))
        .collect();

    let declared_densities: Vec<TargetingValue> = candidates
        .iter()
        .filter_map(|s| s.targeting.density.map(TargetingValue::Density))
        .collect();
    let best_density = DensityMatcher.best_alternative(device, &declared_densities);

    candidates.into_iter().min_by_key(|s| {
        (
            abi_rank(s, device),
            density_rank(s, best_density.as_ref()),
            language_rank(s, device),
            s.path.clone(),
        )
    })
}

fn standalone_compatible(standalone: &StandaloneArtifact, device: &DeviceSpec) -> bool {
    if let Some(abi) = &standalone.targeting.abi {
        let supported = device
            .supported_abis
            .as_ref()
            .is_some_and(|abis| abis.contains(abi));
        if !supported {
            return false;
        }
    }
    if let Some(language) = &standalone.targeting.language {
        let supported = device.supported_locales.as_ref().is_some_and(|locales| {
            locales
                .iter()
                .any(|locale| base_language(locale) == base_language(language))
        });
        if !supported {
            return false;
        }
    }
    true
}

fn abi_rank(standalone: &StandaloneArtifact, device: &DeviceSpec) -> usize {
    match (&standalone.targeting.abi, &device.supported_abis) {
        (Some(abi), Some(abis)) => abis
            .iter()
            .position(|candidate| candidate == abi)
            .unwrap_or(usize::MAX),
        _ => usize::MAX,
    }
}

fn density_rank(standalone: &StandaloneArtifact, best: Option<&TargetingValue>) -> usize {
    match (standalone.targeting.density, best) {
        (Some(density), Some(TargetingValue::Density(best))) if density == *best => 0,
        (None, _) => 1,
        _ => 2,
    }
}

fn language_rank(standalone: &StandaloneArtifact, device: &DeviceSpec) -> usize {
    match (&standalone.targeting.language, &device.supported_locales) {
        (Some(language), Some(locales)) => locales
            .iter()
            .position(|locale| base_language(locale) == base_language(language))
            .unwrap_or(usize::MAX),
        _ => usize::MAX,
    }
}

fn push_unique<'a>(selected: &mut Vec<&'a Artifact>, artifact: &'a Artifact) {
    if !selected.iter().any(|a| a.path == artifact.path) {
        selected.push(artifact);
    }
}
