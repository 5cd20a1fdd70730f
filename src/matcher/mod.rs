//! Device compatibility matching
//!
//! This module matches a device specification against the declared targeting
//! of an APK Set:
//! - Variant matching over the SDK dimension ([`variant`])
//! - Per-dimension "best declared alternative" resolution for the artifact
//!   dimensions ABI, screen density and language
//!
//! Each artifact dimension has one [`DimensionMatcher`] implementation. They
//! share a single contract: pick the best declared alternative for the
//! device, or fall back to the default artifact (`None`) when nothing
//! matches. The matchers are composed in a fixed evaluation order so that
//! artifact selection is deterministic.

pub mod abi;
pub mod density;
pub mod language;
pub mod variant;

pub use variant::{match_variant, match_variants};

use crate::model::{DeviceSpec, Dimension, TargetingValue};

/// Resolution of one device dimension against a set of declared alternatives
///
/// Implementations must never error on a "no match": the documented fallback
/// for every artifact dimension is the default artifact.
pub trait DimensionMatcher {
    /// The dimension this matcher resolves
    fn dimension(&self) -> Dimension;

    /// Best declared alternative for the device, or `None` for the default
    ///
    /// A wildcard device dimension also resolves to `None`; callers that need
    /// the open-set semantics (the size aggregator) pin the dimension to a
    /// concrete hypothetical value before calling.
    fn best_alternative(
        &self,
        device: &DeviceSpec,
        declared: &[TargetingValue],
    ) -> Option<TargetingValue>;
}

/// The artifact-dimension matchers in fixed evaluation order
pub fn artifact_matchers() -> [&'static dyn DimensionMatcher; 3] {
    [
        &abi::AbiMatcher,
        &density::DensityMatcher,
        &language::LanguageMatcher,
    ]
}
