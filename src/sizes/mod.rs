//! Download size aggregation
//!
//! Computes the minimum and maximum over-the-wire size of the artifacts
//! served from an APK Set, grouped by the dimensions the caller asked to
//! expand. Expanded dimensions range over the declared alternative values of
//! each matching variant; dimensions that are neither expanded nor pinned by
//! the device spec stay open, and every choice of an open dimension is
//! enumerated so the (min, max) pair bounds the real spread without
//! materializing every device.
//!
//! Standalone artifacts are self-contained delivery units and report as their
//! own rows, keyed by the targeting values they declare. They additionally
//! bound the split rows wherever standalone precedence flips inside a
//! variant's SDK range.
//!
//! The enumeration is bounded: its size is the product of the distinct
//! alternative counts per dimension, typically single or double digits each.

pub mod config;
pub mod csv;

pub use config::{SizeConfiguration, SizeRange};

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::matcher::{DimensionMatcher, artifact_matchers, match_variants};
use crate::model::{
    DeviceSpec, Dimension, StandaloneArtifact, TableOfContents, TargetingValue, Variant,
    base_language,
};
use crate::resolver::resolve_modules;
use crate::selector::{match_standalone, select_split_artifacts};

/// Parameters of one size report
#[derive(Debug, Clone, Default)]
pub struct SizeRequest {
    /// Device configuration; absent fields stay open
    pub device: DeviceSpec,
    /// Dimensions to expand the report against
    pub dimensions: BTreeSet<Dimension>,
    /// Module filter; standalone artifacts are ignored when set
    pub modules: Option<BTreeSet<String>>,
    /// Report instant modules instead of installable ones
    pub instant: bool,
}

/// Compute the (min, max) download size per expanded configuration
pub fn aggregate(
    toc: &TableOfContents,
    request: &SizeRequest,
) -> Result<BTreeMap<SizeConfiguration, SizeRange>> {
    let resolved = resolve_modules(toc, request.modules.as_ref(), request.instant)?;
    let consider_standalones = request.modules.is_none();

    let mut table: BTreeMap<SizeConfiguration, SizeRange> = BTreeMap::new();
    for variant in match_variants(&request.device, toc) {
        aggregate_variant(
            toc,
            variant,
            &resolved,
            request,
            consider_standalones,
            &mut table,
        )?;
    }
    if consider_standalones {
        aggregate_standalones(toc, request, &mut table);
    }
    Ok(table)
}

/// Fold each standalone artifact in under its own declared values
///
/// A standalone carries everything a device in its range receives, so it
/// contributes a single total under the key its own targeting declares,
/// whether or not any split declares the same alternative. When SDK is
/// expanded, the key is its range lower bound.
fn aggregate_standalones(
    toc: &TableOfContents,
    request: &SizeRequest,
    table: &mut BTreeMap<SizeConfiguration, SizeRange>,
) {
    for standalone in &toc.standalones {
        if !standalone_consistent(standalone, &request.device) {
            continue;
        }
        let mut key = SizeConfiguration::default();
        if request.dimensions.contains(&Dimension::Sdk) {
            key.set_sdk(standalone.sdk.min);
        }
        for dimension in Dimension::ARTIFACT {
            if !request.dimensions.contains(&dimension) {
                continue;
            }
            if let Some(value) = standalone.targeting.value(dimension) {
                key.set(dimension, &value);
            }
        }
        table
            .entry(key)
            .and_modify(|range| range.absorb(standalone.size))
            .or_insert_with(|| SizeRange::of(standalone.size));
    }
}

/// Whether some device covered by the (possibly partial) spec can receive the
/// standalone
///
/// A wildcard dimension constrains nothing; a pinned one must cover the
/// standalone's declared value. Density never disqualifies, matching the
/// density resolution rule.
fn standalone_consistent(standalone: &StandaloneArtifact, device: &DeviceSpec) -> bool {
    if let Some(sdk) = device.sdk_version {
        if !standalone.sdk.contains(sdk) {
            return false;
        }
    }
    if let (Some(abi), Some(abis)) = (&standalone.targeting.abi, &device.supported_abis) {
        if !abis.contains(abi) {
            return false;
        }
    }
    if let (Some(language), Some(locales)) =
        (&standalone.targeting.language, &device.supported_locales)
    {
        let covered = locales
            .iter()
            .any(|locale| base_language(locale) == base_language(language));
        if !covered {
            return false;
        }
    }
    true
}

fn aggregate_variant(
    toc: &TableOfContents,
    variant: &Variant,
    resolved: &BTreeSet<String>,
    request: &SizeRequest,
    consider_standalones: bool,
    table: &mut BTreeMap<SizeConfiguration, SizeRange>,
) -> Result<()> {
    let device = &request.device;

    // Choice space of the expanded artifact dimensions, in matcher order
    let mut expanded_dims = Vec::new();
    let mut expanded_choices: Vec<Vec<Option<TargetingValue>>> = Vec::new();
    // Choice space of the open (unexpanded, unpinned) artifact dimensions
    let mut open_choices: Vec<(Dimension, Vec<Option<TargetingValue>>)> = Vec::new();

    for matcher in artifact_matchers() {
        let dimension = matcher.dimension();
        let declared = declared_in_variant(variant, resolved, dimension);
        if request.dimensions.contains(&dimension) {
            expanded_dims.push(dimension);
            expanded_choices.push(expanded_values(matcher, device, &declared));
        } else if device.is_open(dimension) {
            open_choices.push((dimension, open_values(dimension, &declared)));
        }
    }

    let sdk_pins = sdk_pins(toc, variant, device, consider_standalones, request);

    for combo in combinations(&expanded_choices) {
        let mut key = SizeConfiguration::default();
        if request.dimensions.contains(&Dimension::Sdk) {
            key.set_sdk(variant.sdk.min);
        }
        for (dimension, choice) in expanded_dims.iter().zip(&combo) {
            if let Some(value) = choice {
                key.set(*dimension, value);
            }
        }

        let open_spaces: Vec<Vec<Option<TargetingValue>>> =
            open_choices.iter().map(|(_, values)| values.clone()).collect();
        for open_combo in combinations(&open_spaces) {
            for &sdk in &sdk_pins {
                let mut pinned = device.with_sdk(sdk);
                for (dimension, choice) in expanded_dims.iter().zip(&combo) {
                    pinned = pinned.pinned(*dimension, choice.as_ref());
                }
                for ((dimension, _), choice) in open_choices.iter().zip(&open_combo) {
                    pinned = pinned.pinned(*dimension, choice.as_ref());
                }

                let total = device_total(toc, variant, resolved, &pinned, consider_standalones)?;
                table
                    .entry(key.clone())
                    .and_modify(|range| range.absorb(total))
                    .or_insert_with(|| SizeRange::of(total));
            }
        }
    }
    Ok(())
}

/// Total download size for one fully pinned hypothetical device
fn device_total(
    toc: &TableOfContents,
    variant: &Variant,
    resolved: &BTreeSet<String>,
    device: &DeviceSpec,
    consider_standalones: bool,
) -> Result<u64> {
    if consider_standalones {
        if let Some(standalone) = match_standalone(toc, device) {
            return Ok(standalone.size);
        }
    }
    let artifacts = select_split_artifacts(variant, resolved, device)?;
    Ok(artifacts.iter().map(|a| a.size).sum())
}

/// Distinct declared alternatives of a dimension across the resolved modules
fn declared_in_variant(
    variant: &Variant,
    resolved: &BTreeSet<String>,
    dimension: Dimension,
) -> Vec<TargetingValue> {
    let mut values = Vec::new();
    for module in resolved {
        let Some(set) = variant.artifact_set(module) else {
            continue;
        };
        for value in set.alternatives(dimension) {
            if !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}

/// Values an expanded dimension ranges over
///
/// A device-pinned expanded dimension collapses to the device's resolved
/// alternative; an open one ranges over everything the variant declares.
fn expanded_values(
    matcher: &dyn DimensionMatcher,
    device: &DeviceSpec,
    declared: &[TargetingValue],
) -> Vec<Option<TargetingValue>> {
    if !device.is_open(matcher.dimension()) {
        return vec![matcher.best_alternative(device, declared)];
    }
    if declared.is_empty() {
        return vec![None];
    }
    declared.iter().cloned().map(Some).collect()
}

/// Values an open dimension ranges over
///
/// ABI and language include the no-match fallback (`None`): a real device can
/// support only ABIs or locales the variant never declares, which drops the
/// split. A device always resolves to some density alternative when any are
/// declared, so density has no fallback choice.
fn open_values(dimension: Dimension, declared: &[TargetingValue]) -> Vec<Option<TargetingValue>> {
    let mut values: Vec<Option<TargetingValue>> = declared.iter().cloned().map(Some).collect();
    match dimension {
        Dimension::Abi | Dimension::Language => values.push(None),
        Dimension::ScreenDensity | Dimension::Sdk => {
            if values.is_empty() {
                values.push(None);
            }
        }
    }
    values
}

/// SDK values to pin hypothetical devices at within one variant
///
/// The variant's own lower bound is always enough for split selection (no
/// artifact targets SDK), but standalone precedence can flip inside a variant
/// range, so the boundaries of every standalone range falling inside it are
/// pinned too. Under SDK expansion only the lower bound is pinned: each
/// standalone then reports as its own row keyed by its own range instead of
/// widening the variant's row.
fn sdk_pins(
    toc: &TableOfContents,
    variant: &Variant,
    device: &DeviceSpec,
    consider_standalones: bool,
    request: &SizeRequest,
) -> Vec<u32> {
    if let Some(sdk) = device.sdk_version {
        return vec![sdk];
    }
    if request.dimensions.contains(&Dimension::Sdk) {
        return vec![variant.sdk.min];
    }
    let mut pins: BTreeSet<u32> = [variant.sdk.min].into();
    if consider_standalones {
        for standalone in &toc.standalones {
            if variant.sdk.contains(standalone.sdk.min) {
                pins.insert(standalone.sdk.min);
            }
            if let Some(max) = standalone.sdk.max {
                if variant.sdk.contains(max) {
                    pins.insert(max);
                }
            }
        }
    }
    pins.into_iter().collect()
}

/// Cartesian product of the per-dimension choice spaces
fn combinations(spaces: &[Vec<Option<TargetingValue>>]) -> Vec<Vec<Option<TargetingValue>>> {
    let mut product: Vec<Vec<Option<TargetingValue>>> = vec![vec![]];
    for space in spaces {
        let mut next = Vec::with_capacity(product.len() * space.len());
        for combo in &product {
            for choice in space {
                let mut extended = combo.clone();
                extended.push(choice.clone());
                next.push(extended);
            }
        }
        product = next;
    }
    product
}
