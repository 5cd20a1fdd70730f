//! Variant matching over the SDK dimension
//!
//! Variants are half-open SDK buckets. A fully specified device must land in
//! exactly one bucket; zero or multiple matches means the APK Set was not
//! built consistently for this device and is reported, never resolved
//! silently. Partial specs keep every satisfiable variant in play for size
//! aggregation.

use crate::error::{Result, validation};
use crate::model::{DeviceSpec, TableOfContents, Variant};

/// Match a fully specified device against the variants of an APK Set
///
/// # Errors
///
/// Returns a validation error when zero or more than one variant contains the
/// device SDK.
pub fn match_variant<'a>(device: &DeviceSpec, toc: &'a TableOfContents) -> Result<&'a Variant> {
    // Callers guarantee a full spec; a missing SDK reads as 0 and matches
    // nothing, which surfaces as NoMatchingVariant below.
    let sdk = device.sdk_version.unwrap_or(0);
    let mut matching = toc.variants.iter().filter(|v| v.sdk.contains(sdk));

    let first = matching.next().ok_or_else(|| validation::no_matching_variant(sdk))?;
    let extra = matching.count();
    if extra > 0 {
        return Err(validation::multiple_matching_variants(sdk, extra + 1));
    }
    Ok(first)
}

/// All variants satisfiable for some value of the device's open dimensions
pub fn match_variants<'a>(device: &DeviceSpec, toc: &'a TableOfContents) -> Vec<&'a Variant> {
    match device.sdk_version {
        Some(sdk) => toc
            .variants
            .iter()
            .filter(|v| v.sdk.contains(sdk))
            .collect(),
        None => toc.variants.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApkSetError;
    use crate::model::targeting::SdkRange;

    fn toc_with_ranges(ranges: &[SdkRange]) -> TableOfContents {
        TableOfContents {
            variants: ranges
                .iter()
                .map(|&sdk| Variant {
                    sdk,
                    artifact_sets: vec![],
                })
                .collect(),
            standalones: vec![],
            modules: vec![],
        }
    }

    fn device_with_sdk(sdk: u32) -> DeviceSpec {
        DeviceSpec {
            sdk_version: Some(sdk),
            ..Default::default()
        }
    }

    #[test]
    fn test_exactly_one_variant_matches() {
        let toc = toc_with_ranges(&[SdkRange::between(1, 21), SdkRange::from(21)]);
        let variant = match_variant(&device_with_sdk(23), &toc).unwrap();
        assert_eq!(variant.sdk, SdkRange::from(21));
    }

    #[test]
    fn test_boundary_belongs_to_upper_range() {
        let toc = toc_with_ranges(&[SdkRange::between(1, 21), SdkRange::from(21)]);
        let variant = match_variant(&device_with_sdk(21), &toc).unwrap();
        assert_eq!(variant.sdk, SdkRange::from(21));
    }

    #[test]
    fn test_no_match_is_an_error() {
        let toc = toc_with_ranges(&[SdkRange::between(21, 26)]);
        let err = match_variant(&device_with_sdk(19), &toc).unwrap_err();
        assert!(matches!(err, ApkSetError::NoMatchingVariant { sdk: 19 }));
    }

    #[test]
    fn test_overlapping_match_is_an_error() {
        // Coverage validation would reject this toc; the matcher still
        // refuses to pick among multiple matches on its own.
        let toc = toc_with_ranges(&[SdkRange::from(1), SdkRange::from(21)]);
        let err = match_variant(&device_with_sdk(25), &toc).unwrap_err();
        assert!(matches!(
            err,
            ApkSetError::MultipleMatchingVariants { sdk: 25, count: 2 }
        ));
    }

    #[test]
    fn test_partial_spec_keeps_all_variants() {
        let toc = toc_with_ranges(&[SdkRange::between(1, 21), SdkRange::from(21)]);
        let variants = match_variants(&DeviceSpec::default(), &toc);
        assert_eq!(variants.len(), 2);
    }

    #[test]
    fn test_partial_spec_with_sdk_narrows() {
        let toc = toc_with_ranges(&[SdkRange::between(1, 21), SdkRange::from(21)]);
        let variants = match_variants(&device_with_sdk(19), &toc);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].sdk, SdkRange::between(1, 21));
    }
}
